use lien_api::response::SearchResponse;

use crate::presenter::{present, ResultsBody, ResultsTable, ResultsView};

pub fn escape_html(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect::<String>()
}

/// Render the view body: either the no-results notice or the results table.
/// Rendering is deterministic; the same view always yields the same markup.
pub fn render_results(view: &ResultsView<'_>) -> String {
    match &view.body {
        ResultsBody::NoMatches { category_label } => format!(
            "<div class=\"no-results-info\">No registrations were found for the {}: <b>{}</b></div>",
            category_label,
            escape_html(&view.search_value)
        ),
        ResultsBody::Table(table) => render_table(table),
    }
}

fn render_table(table: &ResultsTable<'_>) -> String {
    let mut head = String::new();
    for column in table.headers {
        head.push_str(&format!("<th>{}</th>", column.label));
    }

    let mut body = String::new();
    for row in table.rows {
        let mut cells = String::new();
        for column in table.headers {
            cells.push_str(&format!("<td>{}</td>", escape_html(&(column.value)(row))));
        }
        // selected holds references into the same slice
        let exact = table.selected.iter().any(|s| std::ptr::eq(*s, row));
        if exact {
            body.push_str(&format!("<tr class=\"exact-match\">{cells}</tr>"));
        } else {
            body.push_str(&format!("<tr>{cells}</tr>"));
        }
    }

    format!(
        "<table class=\"results-table\"><thead><tr>{head}</tr></thead><tbody>{body}</tbody></table>"
    )
}

/// Full results page for one response, in the shape the registry UI serves.
pub fn render_results_page(response: &SearchResponse) -> anyhow::Result<String> {
    let view = present(response)?;
    tracing::debug!(
        "[render] {} of {} results for {}",
        response.results.len(),
        view.total_results,
        response.search_query.category.as_str()
    );
    let value = escape_html(&view.search_value);
    let label = response.search_query.category.label();
    let fragment = render_results(&view);
    Ok(format!(
        "<head><meta charset=\"utf-8\"/><title>Search Results - {value}</title></head>
<body>
  <h1>Personal Property Registry Search</h1>
  <div class=\"search-summary\">{total} registrations found for the {label}: <b>{value}</b></div>
  {fragment}
</body>",
        total = view.total_results,
    ))
}
