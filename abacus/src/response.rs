use crate::Decimal;
use serde::Serialize;

/// Outcome of a successful evaluation, with the intermediate RPN
///
/// `result` serializes as a string so no precision is lost in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub expression: String,
    pub postfix: String,
    pub result: Decimal,
}

impl Response {
    /// History line in the `<input> = <output>` form
    pub fn history_line(&self) -> String {
        format!("{} = {}", self.expression, self.result)
    }
}
