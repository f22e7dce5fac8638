use crate::error::UnknownNodeError;
use crate::frontier::*;
use crate::graph::*;
use crate::route::Route;
use log::debug;
use std::collections::HashSet;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchState {
  /// No origin and destination given yet.
  Initialized,
  Running,
  /// A route to the destination was popped from the frontier.
  Found,
  /// The frontier ran empty before reaching the destination.
  Exhausted,
}

/// Outcome of a single [`SearchSpace::update`].
#[derive(Clone, Debug, PartialEq)]
pub enum Step<N: Identifier> {
  /// The node was marked visited and routes to its unvisited neighbors were added.
  Expanded(N),
  /// The popped route ended at a node which had been expanded since the route was added.
  Discarded(N),
  Found(Route<N>),
  Exhausted,
}

/// Frontier and visited set of one search.
///
/// Each search owns its search space, while the graph is only read, so any number of searches
/// can run over the same graph.
pub struct SearchSpace<N: Identifier> {
  frontier: Frontier<N>,
  visited: HashSet<N>,
  destination: Option<N>,
  state: SearchState,
  expanded: usize,
}

impl<N: Identifier> SearchSpace<N> {
  pub fn new(order: InsertionOrder) -> Self {
    SearchSpace {
      frontier: Frontier::new(order),
      visited: HashSet::new(),
      destination: None,
      state: SearchState::Initialized,
      expanded: 0,
    }
  }

  /// Starts a search, discarding the state of any previous one.
  ///
  /// The frontier is seeded with a route holding only `origin`. On error the space is left
  /// [`SearchState::Initialized`].
  pub fn init<G>(&mut self, graph: G, origin: N, destination: N) -> Result<(), UnknownNodeError<N>>
  where
    G: Metric<NodeId = N>,
  {
    self.frontier.clear();
    self.visited.clear();
    self.destination = None;
    self.state = SearchState::Initialized;
    self.expanded = 0;

    let estimate = graph.distance(&origin, &destination)?;
    self.frontier.insert(Route::start(origin, estimate));
    self.destination = Some(destination);
    self.state = SearchState::Running;
    Ok(())
  }

  pub fn state(&self) -> SearchState {
    self.state
  }

  pub fn visited(&self) -> &HashSet<N> {
    &self.visited
  }

  pub fn frontier(&self) -> &Frontier<N> {
    &self.frontier
  }

  /// Number of nodes expanded so far.
  pub fn expanded(&self) -> usize {
    self.expanded
  }

  /// Performs one step of the search.
  ///
  /// Returns `Ok(None)` unless the search is [`SearchState::Running`]. An error leaves the
  /// search in an undefined state and it should be restarted with [`SearchSpace::init`].
  pub fn update<G>(&mut self, graph: G) -> Result<Option<Step<N>>, UnknownNodeError<N>>
  where
    G: Copy + Metric<NodeId = N> + IntoNeighbors,
  {
    let destination = match (self.state, &self.destination) {
      (SearchState::Running, Some(destination)) => destination.clone(),
      _ => return Ok(None),
    };

    let route = match self.frontier.pop_best() {
      Some(route) => route,
      None => {
        self.state = SearchState::Exhausted;
        return Ok(Some(Step::Exhausted));
      }
    };
    debug!("Analysing route {:?}", route.ids());

    if *route.last() == destination {
      self.state = SearchState::Found;
      return Ok(Some(Step::Found(route)));
    }

    let current = route.last().clone();
    if !self.visited.insert(current.clone()) {
      debug!("{:?} has already been expanded, route dropped", current);
      return Ok(Some(Step::Discarded(current)));
    }
    self.expanded += 1;

    for neighbor in graph.neighbors(&current) {
      if self.visited.contains(&neighbor) {
        debug!("No route will be added to {:?} as it has already been visited", neighbor);
        continue;
      }

      let step = graph.distance(&current, &neighbor)?;
      let estimate = graph.distance(&neighbor, &destination)?;
      self.frontier.insert(route.extend(neighbor, step, estimate));
    }

    Ok(Some(Step::Expanded(current)))
  }
}
