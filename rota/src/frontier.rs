//! Ordered list of candidate routes awaiting expansion.

use crate::graph::Identifier;
use crate::route::Route;
use log::debug;
use superslice::Ext;

/// Where [`Frontier::insert`] places a route relative to the routes already waiting.
///
/// The frontier is always popped from the tail, so the order decides which route is expanded
/// next.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InsertionOrder {
  /// Insert before the first route with a strictly greater score, or append.
  ///
  /// The list stays sorted by ascending score and the tail holds the highest score. Among equal
  /// scores the route inserted last sits furthest from the tail.
  Ascending,
  /// Insert before the first route with a strictly lower score, or append.
  ///
  /// The list stays sorted by descending score and the tail holds the lowest score, which gives
  /// classical best-first behaviour. Among equal scores the route inserted last is popped first.
  Descending,
}

impl Default for InsertionOrder {
  fn default() -> Self {
    InsertionOrder::Ascending
  }
}

pub struct Frontier<N: Identifier> {
  routes: Vec<Route<N>>,
  order: InsertionOrder,
}

impl<N: Identifier> Frontier<N> {
  pub fn new(order: InsertionOrder) -> Self {
    Self {
      routes: Vec::new(),
      order,
    }
  }

  /// Inserts `route` according to the insertion order and returns its index.
  ///
  /// Routes are only ever added here and removed from the tail, so the list is sorted and the
  /// first position matching the order is found by binary search.
  pub fn insert(&mut self, route: Route<N>) -> usize {
    let score = route.score();
    let index = match self.order {
      InsertionOrder::Ascending => self.routes.upper_bound_by(|r| r.score().total_cmp(&score)),
      InsertionOrder::Descending => self.routes.upper_bound_by(|r| score.total_cmp(&r.score())),
    };
    debug!("Route {:?} added into frontier at index {}", route.ids(), index);
    self.routes.insert(index, route);
    index
  }

  /// Removes the route at the tail.
  pub fn pop_best(&mut self) -> Option<Route<N>> {
    self.routes.pop()
  }

  pub fn peek_best(&self) -> Option<&Route<N>> {
    self.routes.last()
  }

  pub fn is_empty(&self) -> bool {
    self.routes.is_empty()
  }

  pub fn len(&self) -> usize {
    self.routes.len()
  }

  /// Waiting routes, head first.
  pub fn routes(&self) -> &[Route<N>] {
    &self.routes
  }

  pub fn clear(&mut self) {
    self.routes.clear();
  }
}
