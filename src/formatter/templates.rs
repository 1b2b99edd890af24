//! Display text for each lookup branch, plus the confidence phrasing used
//! when no lookup applies

use serde_json::{Map, Value};

use crate::lookup::{LookupEndpoint, LookupError, LookupRoute};
use crate::models::{ConversationContext, Intent};

/// Shown under `LookupFailurePolicy::ErrorText`
pub const LOOKUP_ERROR_TEXT: &str = "Sorry, I could not retrieve that information right now";

pub const UNDERSTOOD_THRESHOLD: f64 = 0.75;
pub const UNCERTAIN_THRESHOLD: f64 = 0.5;

/// Phrase the top intent according to how confident the assistant was
pub fn confidence_text(intent: &Intent) -> String {
    if intent.confidence >= UNDERSTOOD_THRESHOLD {
        format!("I understood your intent was {}", intent.intent)
    } else if intent.confidence >= UNCERTAIN_THRESHOLD {
        format!("I think your intent was {}", intent.intent)
    } else {
        "I did not understand your intent".to_string()
    }
}

/// Render the lookup response for the route that produced it
pub fn render(
    route: &LookupRoute,
    context: &ConversationContext,
    body: &Value,
) -> Result<String, LookupError> {
    let address = route.param("address").or_else(|| context.address());

    match route.endpoint {
        LookupEndpoint::AverageRent => {
            let suburb = route.param("suburb").ok_or(LookupError::MissingField("suburb"))?;
            let record = first_record(body)?;
            Ok(format!(
                "The average rent for {} is ${} per week",
                suburb,
                field(record, "average_rent")?
            ))
        }
        LookupEndpoint::Inspections => render_inspections(body),
        LookupEndpoint::Repairs => render_repairs(body),
        LookupEndpoint::Transport => {
            let suburb = route.param("suburb").ok_or(LookupError::MissingField("suburb"))?;
            let record = first_record(body)?;
            Ok(format!(
                "The nearest station to {} is {}, {} km away",
                suburb,
                field(record, "station")?,
                field(record, "distance")?
            ))
        }
        LookupEndpoint::PropertyDetails => {
            let record = first_record(body)?;
            let address = record_address(record, address)?;
            Ok(format!(
                "{} has {} bedrooms, {} bathrooms and {} car parking spaces",
                address,
                field(record, "bedrooms")?,
                field(record, "bathrooms")?,
                field(record, "carparking")?
            ))
        }
        LookupEndpoint::Tenant => {
            let address = address.ok_or(LookupError::MissingField("address"))?;
            match optional_field(body, "tenants") {
                Some(tenants) => Ok(format!("The tenants at {} are {}", address, tenants)),
                None => Ok(format!("Currently there is no tenants at {}", address)),
            }
        }
        LookupEndpoint::Landlord => {
            let address = address.ok_or(LookupError::MissingField("address"))?;
            match optional_field(body, "landlord") {
                Some(landlord) => Ok(format!("The landlord of {} is {}", address, landlord)),
                None => Ok(format!("Currently there is no landlord at {}", address)),
            }
        }
        LookupEndpoint::Carparking => {
            let record = first_record(body)?;
            let address = record_address(record, address)?;
            Ok(format!(
                "There are {} car parking spaces at {}",
                field(record, "carparking")?,
                address
            ))
        }
    }
}

fn render_inspections(body: &Value) -> Result<String, LookupError> {
    let records = records(body);
    if records.is_empty() {
        return Ok("There are no upcoming inspections".to_string());
    }

    let mut text = String::new();
    for record in records {
        text.push_str(&format!(
            "{}. Date: {} Time: {} Address: {} ",
            field(record, "id")?,
            truncate(&field(record, "date")?, 10),
            truncate(&field(record, "time")?, 5),
            field(record, "address")?
        ));
    }
    Ok(text)
}

fn render_repairs(body: &Value) -> Result<String, LookupError> {
    let records = records(body);
    if records.is_empty() {
        return Ok("There are no outstanding repairs".to_string());
    }

    let mut text = String::new();
    for record in records {
        text.push_str(&format!(
            "Address: {} Issue: {} ",
            field(record, "address")?,
            field(record, "issue")?
        ));
    }
    Ok(text)
}

/// Objects in the body: the body itself, or the elements of an array
fn records(body: &Value) -> Vec<&Map<String, Value>> {
    match body {
        Value::Object(record) => vec![record],
        Value::Array(items) => items.iter().filter_map(Value::as_object).collect(),
        _ => Vec::new(),
    }
}

fn first_record(body: &Value) -> Result<&Map<String, Value>, LookupError> {
    records(body)
        .into_iter()
        .next()
        .ok_or(LookupError::EmptyResult)
}

/// Text form of a scalar; `None` for null
fn display(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(display).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        other => Some(other.to_string()),
    }
}

fn field(record: &Map<String, Value>, name: &'static str) -> Result<String, LookupError> {
    record
        .get(name)
        .and_then(display)
        .ok_or(LookupError::MissingField(name))
}

/// Field of the first record, treating null, absence and no records alike
fn optional_field(body: &Value, name: &str) -> Option<String> {
    records(body)
        .into_iter()
        .next()
        .and_then(|record| record.get(name))
        .and_then(display)
}

fn record_address(
    record: &Map<String, Value>,
    fallback: Option<&str>,
) -> Result<String, LookupError> {
    field(record, "address").or_else(|err| fallback.map(str::to_string).ok_or(err))
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
