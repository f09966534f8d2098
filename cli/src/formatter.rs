use abacus::Response;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};

enum LineType {
    Postfix,
    FinalResult,
}

impl LineType {
    fn format_line(&self, content: &str) -> String {
        let symbol = match self {
            LineType::Postfix => "├─ rpn",
            LineType::FinalResult => "└─ =",
        };
        format!("{} {}\n", symbol, content)
    }
}

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    /// Render one evaluation.
    ///
    /// `raw` prints only the value (for piping), `explain` adds the RPN form.
    pub fn format_response(&self, response: &Response, raw: bool, explain: bool) -> String {
        if raw {
            return format!("{}\n", response.result);
        }

        if explain {
            let mut output = format!("{}\n", response.expression);
            output.push_str(&LineType::Postfix.format_line(&response.postfix));
            output.push_str(&LineType::FinalResult.format_line(&response.result.to_string()));
            return output;
        }

        format!("{}\n", response.history_line())
    }

    pub fn format_history(&self, history: &[Response]) -> String {
        if history.is_empty() {
            return "No calculations yet.\n".to_string();
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("#").set_alignment(CellAlignment::Right),
            Cell::new("Expression").set_alignment(CellAlignment::Left),
            Cell::new("Result").set_alignment(CellAlignment::Right),
        ]));

        for (i, response) in history.iter().enumerate() {
            table.add_row(Row::from(vec![
                Cell::new(i + 1).set_alignment(CellAlignment::Right),
                Cell::new(&response.expression),
                Cell::new(&response.result).set_alignment(CellAlignment::Right),
            ]));
        }

        format!("{}\n", table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abacus::Engine;

    #[test]
    fn test_plain_output_is_history_line() {
        let response = Engine::new().explain("3+4").unwrap();
        let formatter = Formatter::default();
        assert_eq!(formatter.format_response(&response, false, false), "3+4 = 7\n");
        assert_eq!(formatter.format_response(&response, true, false), "7\n");
    }

    #[test]
    fn test_explain_output() {
        let response = Engine::new().explain("200*10%").unwrap();
        let output = Formatter::default().format_response(&response, false, true);
        assert_eq!(output, "200*10%\n├─ rpn 200 10 percent *\n└─ = 20\n");
    }

    #[test]
    fn test_history_table() {
        let engine = Engine::new();
        let history = vec![
            engine.explain("1+1").unwrap(),
            engine.explain("sqrt(81)").unwrap(),
        ];
        let table = Formatter::default().format_history(&history);
        assert!(table.contains("Expression"));
        assert!(table.contains("sqrt(81)"));
        assert!(table.contains("9"));
        assert_eq!(
            Formatter::default().format_history(&[]),
            "No calculations yet.\n"
        );
    }
}
