use super::*;

#[test]
fn windowed_links() {
  let output = CommandBuilder::new("pages --total 99 --current 30").run_and_deserialize_output();

  pretty_assert_eq!(
    numbers(&output),
    [Some(1), None, Some(29), Some(30), Some(31), None, Some(99)],
  );

  pretty_assert_eq!(
    output["links"][3],
    json!({
      "number": 30,
      "url": "?page=30",
      "is_current": true,
      "is_filler": false,
    }),
  );

  pretty_assert_eq!(
    output["links"][1],
    json!({
      "number": null,
      "url": null,
      "is_current": false,
      "is_filler": true,
    }),
  );
}

#[test]
fn minified() {
  pretty_assert_eq!(
    CommandBuilder::new("--minify pages --total 2 --current 2").run_and_extract_stdout(),
    concat!(
      r#"{"max_distance":1,"contiguous":false,"links":["#,
      r#"{"number":1,"url":"?page=1","is_current":false,"is_filler":false},"#,
      r#"{"number":2,"url":"?page=2","is_current":true,"is_filler":false}"#,
      "]}\n",
    ),
  );
}

#[test]
fn max_distance_and_contiguous_flags() {
  let output = CommandBuilder::new("--max-distance 2 pages --total 99 --current 30")
    .run_and_deserialize_output();

  pretty_assert_eq!(output["max_distance"], 2);
  pretty_assert_eq!(
    numbers(&output),
    [
      Some(1),
      None,
      Some(28),
      Some(29),
      Some(30),
      Some(31),
      Some(32),
      None,
      Some(99)
    ],
  );

  let output = CommandBuilder::new("--contiguous pages --total 10 --current 5")
    .run_and_deserialize_output();

  pretty_assert_eq!(output["contiguous"], true);
  pretty_assert_eq!(
    numbers(&output),
    (1..=10).map(Some).collect::<Vec<Option<u64>>>(),
  );
}

#[test]
fn routed_links() {
  let output = CommandBuilder::new([
    "pages",
    "--total",
    "3",
    "--current",
    "1",
    "--pattern",
    "/tag/:tag/:page",
    "--kwarg",
    "tag=rust lang",
  ])
  .run_and_deserialize_output();

  pretty_assert_eq!(output["links"][2]["url"], "/tag/rust%20lang/3");

  let output = CommandBuilder::new(
    "pages --total 3 --current 1 --pattern /tag/:tag/:page --arg rust",
  )
  .run_and_deserialize_output();

  pretty_assert_eq!(output["links"][0]["url"], "/tag/rust/1");
}

#[test]
fn unknown_route_keyword() {
  CommandBuilder::new("pages --total 3 --current 1 --pattern /items/:page --kwarg tag=rust")
    .expected_exit_code(1)
    .expected_stderr(
      "error: failed to reverse route `pages`\nbecause: unknown keyword arguments: `tag`\n",
    )
    .run_and_extract_stdout();
}

#[test]
fn current_page_out_of_range() {
  CommandBuilder::new("pages --total 5 --current 6")
    .expected_exit_code(1)
    .expected_stderr("error: page 6 is outside of 1..=5\n")
    .run_and_extract_stdout();
}

#[test]
fn zero_total() {
  CommandBuilder::new("pages --total 0 --current 1")
    .expected_exit_code(1)
    .expected_stderr("error: total page count must be at least 1\n")
    .run_and_extract_stdout();
}
