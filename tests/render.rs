use super::*;

const CONTEXT: &str = r#"{
  "page": { "number": 30, "paginator": { "count": 990, "per_page": 10 } },
  "tag": "rust"
}"#;

#[test]
fn block_form() {
  pretty_assert_eq!(
    CommandBuilder::new("render list.html --context context.json --route items=/items/:page")
      .write(
        "list.html",
        "
          <ul>
          {% paginationplus page items %}
          {% if paginationplus.is_filler %}<li>…</li>{% else %}<li>{{ paginationplus }}</li>{% endif %}
          {% endpaginationplus %}
          </ul>
        "
        .unindent()
        .lines()
        .map(str::trim)
        .collect::<String>(),
      )
      .write("context.json", CONTEXT)
      .run_and_extract_stdout(),
    concat!(
      "<ul>",
      r#"<li><a href="/items/1">1</a></li>"#,
      "<li>…</li>",
      r#"<li><a href="/items/29">29</a></li>"#,
      r#"<li><a href="/items/30">30</a></li>"#,
      r#"<li><a href="/items/31">31</a></li>"#,
      "<li>…</li>",
      r#"<li><a href="/items/99">99</a></li>"#,
      "</ul>",
    ),
  );
}

#[test]
fn with_form_includes_template_from_same_directory() {
  pretty_assert_eq!(
    CommandBuilder::new([
      "--contiguous",
      "render",
      "templates/list.html",
      "--context",
      "context.json",
      "--route",
      "tagged=/tag/:tag/:page",
    ])
    .write(
      "templates/list.html",
      "{% paginationplus page 'tagged' tag=tag with 'link.html' %}",
    )
    .write("templates/link.html", "{{ paginationplus.url }} ")
    .write(
      "context.json",
      r#"{"page": {"number": 2, "paginator": {"count": 30, "per_page": 10}}, "tag": "rust"}"#,
    )
    .run_and_extract_stdout(),
    "/tag/rust/1 /tag/rust/2 /tag/rust/3 ",
  );
}

#[test]
fn without_context_page_is_invalid() {
  CommandBuilder::new("render list.html")
    .write("list.html", "{% paginationplus page items %}{% endpaginationplus %}")
    .expected_exit_code(1)
    .expected_stderr("error: 'page' is not a valid Page object\n")
    .run_and_extract_stdout();
}

#[test]
fn syntax_error() {
  CommandBuilder::new("render list.html")
    .write("list.html", "{% paginationplus page %}")
    .expected_exit_code(1)
    .expected_stderr(
      "error: failed to parse template `list.html`\nbecause: 'paginationplus' tag expects at least 2 arguments\n",
    )
    .run_and_extract_stdout();
}

#[test]
fn missing_template() {
  CommandBuilder::new("render missing.html")
    .expected_exit_code(1)
    .run_and_extract_stdout();
}
