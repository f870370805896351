//! Failure-absorbing wrapper around a [`WalkingRouter`].

use tracing::{debug, warn};

use super::types::{RouteResult, WalkingRouter};
use crate::coord::Coordinate;

/// Resolves walking routes, turning every failure into "no route".
///
/// Discovery treats a missing route as an ordinary outcome for a direction,
/// so errors are logged here and never propagated.
pub struct RouteResolver<R: WalkingRouter> {
    router: R,
}

impl<R: WalkingRouter> RouteResolver<R> {
    pub fn new(router: R) -> Self {
        Self { router }
    }

    /// Returns the wrapped router.
    pub fn router(&self) -> &R {
        &self.router
    }

    /// Finds a walking route from `start` to `end`, or `None` on any failure.
    pub async fn find_walking_route(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> Option<RouteResult> {
        match self.router.route(start, end).await {
            Ok(route) => Some(route),
            Err(e) => {
                warn!(
                    service = self.router.name(),
                    start = %start,
                    end = %end,
                    error = %e,
                    "Walking route unavailable"
                );
                debug!(error = ?e, "Route failure detail");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RoutingError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedRouter {
        result: Result<RouteResult, RoutingError>,
        calls: AtomicUsize,
    }

    impl WalkingRouter for FixedRouter {
        async fn route(
            &self,
            _start: Coordinate,
            _end: Coordinate,
        ) -> Result<RouteResult, RoutingError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[tokio::test]
    async fn test_success_passes_route_through() {
        let route = RouteResult::new(vec![coord(0.0, 0.0), coord(0.04, 0.0)], 4.5).unwrap();
        let resolver = RouteResolver::new(FixedRouter {
            result: Ok(route.clone()),
            calls: AtomicUsize::new(0),
        });

        let found = resolver
            .find_walking_route(coord(0.0, 0.0), coord(0.045, 0.0))
            .await;
        assert_eq!(found, Some(route));
    }

    #[tokio::test]
    async fn test_errors_become_none() {
        for error in [
            RoutingError::NoRoute,
            RoutingError::InvalidResponse("bad".to_string()),
            RoutingError::Service {
                code: "TooBig".to_string(),
                message: String::new(),
            },
        ] {
            let resolver = RouteResolver::new(FixedRouter {
                result: Err(error),
                calls: AtomicUsize::new(0),
            });

            let found = resolver
                .find_walking_route(coord(0.0, 0.0), coord(0.045, 0.0))
                .await;
            assert!(found.is_none());
        }
    }

    #[tokio::test]
    async fn test_single_attempt_per_call() {
        let resolver = RouteResolver::new(FixedRouter {
            result: Err(RoutingError::NoRoute),
            calls: AtomicUsize::new(0),
        });

        resolver
            .find_walking_route(coord(0.0, 0.0), coord(0.045, 0.0))
            .await;
        assert_eq!(resolver.router().calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_route_result_invariants() {
        assert!(RouteResult::new(vec![coord(0.0, 0.0)], 1.0).is_err());
        assert!(RouteResult::new(vec![coord(0.0, 0.0), coord(1.0, 0.0)], 0.0).is_err());
        assert!(RouteResult::new(vec![coord(0.0, 0.0), coord(1.0, 0.0)], f64::NAN).is_err());

        let route = RouteResult::new(vec![coord(0.0, 0.0), coord(1.0, 0.0)], 111.2).unwrap();
        assert_eq!(route.start(), coord(0.0, 0.0));
        assert_eq!(route.endpoint(), coord(1.0, 0.0));
    }
}
