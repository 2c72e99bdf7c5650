// 🧭 Route Identifiers - Navigation targets
// Containers receive an `FnMut(RoutePath)` callback instead of a router

/// RoutePath - The pages a navigation callback can be asked to move to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePath {
    Login,
    Bills,
    NewBill,
    Dashboard,
}

impl RoutePath {
    /// Path identifier as the front end encodes it.
    pub fn path(&self) -> &'static str {
        match self {
            RoutePath::Login => "/",
            RoutePath::Bills => "#employee/bills",
            RoutePath::NewBill => "#employee/bill/new",
            RoutePath::Dashboard => "#admin/dashboard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_paths() {
        assert_eq!(RoutePath::Bills.path(), "#employee/bills");
        assert_eq!(RoutePath::NewBill.path(), "#employee/bill/new");
    }

    #[test]
    fn test_login_is_root() {
        assert_eq!(RoutePath::Login.path(), "/");
    }
}
