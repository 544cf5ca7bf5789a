use std::fmt::Write;

use crate::models::{MonthlySummary, StatementResult};
use crate::view::ViewContext;

pub const FILTER_VIEW: &str = "filter-view";
pub const USER_SELECT: &str = "user-select";
pub const SUBMIT_BUTTON: &str = "submit-btn";
pub const STATEMENTS_VIEW: &str = "statements-view";
pub const LOADER_VIEW: &str = "loader-view";
pub const HIDE_LOADER: &str = "hide-loader";
pub const USER_NAME: &str = "user-name";
pub const USER_BALANCE: &str = "user-balance";
pub const MONTHLY_STATEMENTS: &str = "monthly-statements";
pub const STATEMENT_CARD: &str = "statement-card";
pub const MONTHLY_BALANCE: &str = "monthly-balance";
pub const MONTH_YEAR: &str = "month-year";
pub const MONTHLY_CREDIT: &str = "monthly-credit";
pub const MONTHLY_DEBIT: &str = "monthly-debit";

/// Renders the filter view, the loader and the statements view the page shows after a submit.
///
/// Element ids and classes are what the browser suite looks elements up by; one
/// `statement-card` is emitted per monthly summary, in summary order.
pub fn render_html(statement: &StatementResult, context: &ViewContext) -> String {
    let mut html = String::new();

    let loader_class = if context.loader_visible {
        LOADER_VIEW.to_string()
    } else {
        format!("{LOADER_VIEW} {HIDE_LOADER}")
    };

    render_filter(&mut html, statement, context);

    // Writing to a String cannot fail.
    let _ = writeln!(html, r#"<div id="{LOADER_VIEW}" class="{loader_class}"></div>"#);
    let _ = writeln!(html, r#"<div id="{STATEMENTS_VIEW}">"#);
    let _ = writeln!(html, r#"  <p id="{USER_NAME}">{}</p>"#, escape(context.user_name(statement)));
    let _ = writeln!(html, r#"  <p id="{USER_BALANCE}">Balance: {}</p>"#, escape(&statement.balance.to_string()));
    let _ = writeln!(html, r#"  <div id="{MONTHLY_STATEMENTS}">"#);

    for summary in &statement.monthly {
        render_card(&mut html, summary);
    }

    let _ = writeln!(html, "  </div>");
    let _ = writeln!(html, "</div>");

    html
}

fn render_filter(html: &mut String, statement: &StatementResult, context: &ViewContext) {
    let placeholder = if context.selected_user.is_none() { " selected" } else { "" };

    let _ = writeln!(html, r#"<div id="{FILTER_VIEW}">"#);
    let _ = writeln!(html, r#"  <select id="{USER_SELECT}">"#);
    let _ = writeln!(html, r#"    <option value="-1" disabled{placeholder}>Select User</option>"#);

    if let Some(user_id) = context.selected_user {
        let _ = writeln!(html, r#"    <option value="{user_id}" selected>{}</option>"#, escape(context.user_name(statement)));
    }

    let _ = writeln!(html, "  </select>");
    let _ = writeln!(html, r#"  <button id="{SUBMIT_BUTTON}" type="button">Show Statements</button>"#);
    let _ = writeln!(html, "</div>");
}

fn render_card(html: &mut String, summary: &MonthlySummary) {
    let _ = writeln!(html, r#"    <div class="{STATEMENT_CARD}">"#);
    let _ = writeln!(html, r#"      <p class="{MONTHLY_BALANCE}">{}</p>"#, escape(&summary.balance.to_string()));
    let _ = writeln!(html, r#"      <p class="{MONTH_YEAR}">{}</p>"#, summary.month);
    let _ = writeln!(html, r#"      <p class="{MONTHLY_CREDIT}">Credit: {}</p>"#, escape(&summary.credit_amount.to_string()));
    let _ = writeln!(html, r#"      <p class="{MONTHLY_DEBIT}">Debit: {}</p>"#, escape(&summary.debit_amount.to_string()));
    let _ = writeln!(html, "    </div>");
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c)
        }
    }

    escaped
}
