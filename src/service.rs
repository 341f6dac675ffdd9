//! The two demo services and the routes each one registers

use std::fmt;

use hyper::Method;

use crate::error::Result;
use crate::handler::{account, weather};
use crate::routing::RouteTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Account,
    Weather,
}

impl Service {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Account => "accountservice",
            Self::Weather => "weatherbackend",
        }
    }

    pub const fn default_port(self) -> u16 {
        match self {
            Self::Account => 6767,
            Self::Weather => 6768,
        }
    }

    /// Prefix for environment overrides, e.g. `WEATHERBACKEND_SERVER__PORT`
    pub const fn env_prefix(self) -> &'static str {
        match self {
            Self::Account => "ACCOUNTSERVICE",
            Self::Weather => "WEATHERBACKEND",
        }
    }

    /// Route table in registration order
    pub fn routes(self) -> Result<RouteTable> {
        let table = RouteTable::new().route(
            "GetAccount",
            Method::GET,
            "/accounts/{accountId}",
            account::get_account,
        )?;

        match self {
            Self::Account => Ok(table),
            Self::Weather => table
                .route(
                    "GetTheSenseInThat",
                    Method::GET,
                    "/{name}",
                    weather::get_the_sense_in_that,
                )?
                .route(
                    "GeneralOutlook",
                    Method::POST,
                    "/weather/general/outlook",
                    weather::general_outlook,
                ),
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route_names(service: Service) -> Vec<&'static str> {
        service
            .routes()
            .unwrap()
            .routes()
            .iter()
            .map(|r| r.name)
            .collect()
    }

    #[test]
    fn test_registration_order() {
        assert_eq!(route_names(Service::Account), ["GetAccount"]);
        assert_eq!(
            route_names(Service::Weather),
            ["GetAccount", "GetTheSenseInThat", "GeneralOutlook"]
        );
    }

    #[test]
    fn test_accounts_path_prefers_get_account() {
        let table = Service::Weather.routes().unwrap();
        let (route, param) = table.find(&Method::GET, "/accounts/123").unwrap();
        assert_eq!(route.name, "GetAccount");
        assert_eq!(param, Some(("accountId", "123")));

        // A single segment falls through to the greeting route
        let (route, _) = table.find(&Method::GET, "/accounts").unwrap();
        assert_eq!(route.name, "GetTheSenseInThat");
    }

    #[test]
    fn test_outlook_is_post_only() {
        let table = Service::Weather.routes().unwrap();
        assert!(table.find(&Method::GET, "/weather/general/outlook").is_none());
    }
}
