//! Route selection: which lookup (if any) a turn triggers
//!
//! The top intent is matched first; the `currentContext` marker is only
//! consulted when no intent row produces a route.

use crate::config::{CarparkingRule, FormatterOptions};
use crate::lookup::{LookupEndpoint, LookupRoute};
use crate::models::NluResult;

/// Where a row reads its query parameter from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Param {
    None,
    /// First entity value, then context `suburb`
    Suburb,
    /// Context `address`; the row does not match without one
    Address,
    /// Context `address` when present
    OptionalAddress,
}

struct Row {
    key: &'static str,
    endpoint: LookupEndpoint,
    param: Param,
}

const INTENT_TABLE: &[Row] = &[
    Row {
        key: "averageRent",
        endpoint: LookupEndpoint::AverageRent,
        param: Param::Suburb,
    },
    Row {
        key: "inspections",
        endpoint: LookupEndpoint::Inspections,
        param: Param::None,
    },
    Row {
        key: "repairs",
        endpoint: LookupEndpoint::Repairs,
        param: Param::None,
    },
    Row {
        key: "transport",
        endpoint: LookupEndpoint::Transport,
        param: Param::Suburb,
    },
    Row {
        key: "propertyDetails",
        endpoint: LookupEndpoint::PropertyDetails,
        param: Param::Address,
    },
];

const CONTEXT_TABLE: &[Row] = &[
    Row {
        key: "tenant",
        endpoint: LookupEndpoint::Tenant,
        param: Param::Address,
    },
    Row {
        key: "landlord",
        endpoint: LookupEndpoint::Landlord,
        param: Param::Address,
    },
    Row {
        key: "carparking",
        endpoint: LookupEndpoint::Carparking,
        param: Param::Address,
    },
];

/// Pick at most one lookup for this turn
pub fn select_route(result: &NluResult, options: &FormatterOptions) -> Option<LookupRoute> {
    let top = result.top_intent()?;

    if let Some(route) = find_row(INTENT_TABLE, &top.intent)
        .and_then(|row| build_route(row, row.param, result))
    {
        return Some(route);
    }

    let marker = result.context.current_context()?;
    let row = find_row(CONTEXT_TABLE, marker)?;
    let param = match (row.endpoint, options.carparking) {
        (LookupEndpoint::Carparking, CarparkingRule::Independent) => Param::OptionalAddress,
        _ => row.param,
    };
    build_route(row, param, result)
}

fn find_row<'a>(table: &'a [Row], key: &str) -> Option<&'a Row> {
    table.iter().find(|row| row.key == key)
}

fn build_route(row: &Row, param: Param, result: &NluResult) -> Option<LookupRoute> {
    let route = LookupRoute::new(row.endpoint);
    match param {
        Param::None => Some(route),
        Param::Suburb => result
            .first_entity_value()
            .or_else(|| result.context.suburb())
            .map(|suburb| route.with_param("suburb", suburb)),
        Param::Address => result
            .context
            .address()
            .map(|address| route.with_param("address", address)),
        Param::OptionalAddress => Some(match result.context.address() {
            Some(address) => route.with_param("address", address),
            None => route,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConversationContext, Entity, Intent};

    fn result(intent: &str, context: ConversationContext) -> NluResult {
        NluResult {
            intents: vec![Intent::new(intent, 0.9)],
            context,
            ..NluResult::default()
        }
    }

    fn select(result: &NluResult) -> Option<LookupRoute> {
        select_route(result, &FormatterOptions::default())
    }

    #[test]
    fn test_no_intents_selects_nothing() {
        let result = NluResult {
            context: ConversationContext::new().with("currentContext", "tenant"),
            ..NluResult::default()
        };
        assert!(select(&result).is_none());
    }

    #[test]
    fn test_average_rent_uses_first_entity() {
        let mut result = result("averageRent", ConversationContext::new());
        result.entities = vec![Entity::new("suburb", "melbourne"), Entity::new("suburb", "carlton")];

        let route = select(&result).unwrap();
        assert_eq!(route.endpoint, LookupEndpoint::AverageRent);
        assert_eq!(route.param("suburb"), Some("melbourne"));
    }

    #[test]
    fn test_average_rent_falls_back_to_context_suburb() {
        let result = result(
            "averageRent",
            ConversationContext::new().with("suburb", "richmond"),
        );
        assert_eq!(select(&result).unwrap().param("suburb"), Some("richmond"));
    }

    #[test]
    fn test_average_rent_without_suburb_selects_nothing() {
        assert!(select(&result("averageRent", ConversationContext::new())).is_none());
    }

    #[test]
    fn test_parameterless_intents() {
        let route = select(&result("inspections", ConversationContext::new())).unwrap();
        assert_eq!(route, LookupRoute::new(LookupEndpoint::Inspections));

        let route = select(&result("repairs", ConversationContext::new())).unwrap();
        assert_eq!(route, LookupRoute::new(LookupEndpoint::Repairs));
    }

    #[test]
    fn test_property_details_requires_address() {
        assert!(select(&result("propertyDetails", ConversationContext::new())).is_none());

        let route = select(&result(
            "propertyDetails",
            ConversationContext::new().with("address", "1 Main St"),
        ))
        .unwrap();
        assert_eq!(route.endpoint, LookupEndpoint::PropertyDetails);
        assert_eq!(route.param("address"), Some("1 Main St"));
    }

    #[test]
    fn test_context_rows() {
        for (marker, endpoint) in [
            ("tenant", LookupEndpoint::Tenant),
            ("landlord", LookupEndpoint::Landlord),
            ("carparking", LookupEndpoint::Carparking),
        ] {
            let context = ConversationContext::new()
                .with("currentContext", marker)
                .with("address", "1 Main St");
            let route = select(&result("anything", context)).unwrap();
            assert_eq!(route.endpoint, endpoint);
            assert_eq!(route.param("address"), Some("1 Main St"));
        }
    }

    #[test]
    fn test_tenant_without_address_selects_nothing() {
        let context = ConversationContext::new().with("currentContext", "tenant");
        assert!(select(&result("anything", context)).is_none());
    }

    #[test]
    fn test_intent_beats_context() {
        let context = ConversationContext::new()
            .with("currentContext", "tenant")
            .with("address", "1 Main St");
        let route = select(&result("inspections", context)).unwrap();
        assert_eq!(route.endpoint, LookupEndpoint::Inspections);
    }

    #[test]
    fn test_unmatched_intent_row_defers_to_context() {
        // averageRent without a suburb cannot build its route
        let context = ConversationContext::new()
            .with("currentContext", "landlord")
            .with("address", "1 Main St");
        let route = select(&result("averageRent", context)).unwrap();
        assert_eq!(route.endpoint, LookupEndpoint::Landlord);
    }

    #[test]
    fn test_carparking_requires_address_by_default() {
        let context = ConversationContext::new().with("currentContext", "carparking");
        assert!(select(&result("anything", context)).is_none());
    }

    #[test]
    fn test_carparking_independent_of_address() {
        let options = FormatterOptions::default().with_carparking(CarparkingRule::Independent);

        let context = ConversationContext::new().with("currentContext", "carparking");
        let route = select_route(&result("anything", context), &options).unwrap();
        assert_eq!(route, LookupRoute::new(LookupEndpoint::Carparking));

        let context = ConversationContext::new()
            .with("currentContext", "carparking")
            .with("address", "3 Low Rd");
        let route = select_route(&result("anything", context), &options).unwrap();
        assert_eq!(route.param("address"), Some("3 Low Rd"));
    }

    #[test]
    fn test_independent_rule_leaves_other_rows_alone() {
        let options = FormatterOptions::default().with_carparking(CarparkingRule::Independent);
        let context = ConversationContext::new().with("currentContext", "tenant");
        assert!(select_route(&result("anything", context), &options).is_none());
    }

    #[test]
    fn test_unknown_intent_and_context() {
        let context = ConversationContext::new()
            .with("currentContext", "weather")
            .with("address", "1 Main St");
        assert!(select(&result("greeting", context)).is_none());
    }
}
