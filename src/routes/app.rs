//! Root application routes.

use crate::routes::auth::auth_routes;
use crate::routing::{Route, RouteTable, CATCH_ALL};
use crate::views::not_found_view;

pub fn app_routes() -> RouteTable {
    RouteTable::new(vec![
        Route::new("auth").load_children(auth_routes),
        Route::new("404").load_view(not_found_view).title("Page Not Found"),
        Route::redirect(CATCH_ALL, "404"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Router;

    #[test]
    fn test_catch_all_is_last() {
        let table = app_routes();
        let last = table.routes().last().unwrap();
        assert!(last.pattern().is_catch_all());
        assert_eq!(table.routes().iter().filter(|r| r.pattern().is_catch_all()).count(), 1);
    }

    #[test]
    fn test_auth_table_loaded_on_demand() {
        let router = Router::new(app_routes());
        let auth = router.root().routes()[0].describe(false);
        assert!(auth.deferred_children);

        router.recognize("/404").unwrap();
        assert!(router.root().routes()[0].describe(false).deferred_children);

        router.recognize("/auth/login").unwrap();
        assert!(!router.root().routes()[0].describe(false).deferred_children);
    }
}
