//! Block-boundary merging and group-eligibility rules of the tree walk.

use rs_textractor::{extract, extract_with_options, Options, Selector};

#[test]
fn nested_block_boundaries_never_merge() {
    // "tail" follows the inner <p>; its nearest block ancestor is the outer
    // div, not the most recently entered block, so it starts a new fragment.
    let result = match extract("<body><div>Outer <p>Inner</p> tail</div></body>") {
        Ok(result) => result,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    let fragments = result
        .by_tag("body")
        .and_then(|group| group.content.as_fragments());
    assert_eq!(
        fragments,
        Some(&["Outer".to_string(), "Inner".to_string(), "tail".to_string()][..])
    );
}

#[test]
fn sibling_blocks_inside_a_block_each_start_a_fragment() {
    let result = match extract("<body><div>A<div>B</div>C</div></body>") {
        Ok(result) => result,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    let fragments = result
        .by_tag("body")
        .and_then(|group| group.content.as_fragments());
    assert_eq!(
        fragments,
        Some(&["A".to_string(), "B".to_string(), "C".to_string()][..])
    );
}

#[test]
fn text_outside_every_group_is_dropped() {
    let html = r#"<body><p>before</p><div class="a"><p>One</p></div><p>after</p></body>"#;
    let options = Options {
        element_groupers: vec![Selector::attr("class", "a")],
        ..Options::default()
    };
    let result = match extract_with_options(html, &options) {
        Ok(result) => result,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(result.len(), 1);
    let fragments = result.groups[0].content.as_fragments();
    assert_eq!(fragments, Some(&["One".to_string()][..]));
}

#[test]
fn result_keys_are_exactly_the_resolved_groups() {
    // A grouper that matches an empty container still owns a (empty) slot in
    // the output, independent of join_texts.
    let html = r#"<div class="a"><p>One</p></div><div class="b"></div>"#;
    let groupers = vec![
        Selector::attr("class", "a"),
        Selector::attr("class", "b"),
    ];

    for join_texts in [false, true] {
        let options = Options {
            element_groupers: groupers.clone(),
            join_texts,
            ..Options::default()
        };
        let result = match extract_with_options(html, &options) {
            Ok(result) => result,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };

        assert_eq!(result.len(), 2);
        let empty_group = result.by_attr("class", "b");
        assert!(empty_group.is_some_and(|g| g.content.is_empty()));
    }
}

#[test]
fn non_block_group_anchor_never_activates() {
    // Only block tags update the group tracking, so a <span> anchor is
    // registered but never collects text.
    let options = Options {
        element_groupers: vec![Selector::tag("span")],
        ..Options::default()
    };
    let result = match extract_with_options("<body><span>Hi</span></body>", &options) {
        Ok(result) => result,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(result.len(), 1);
    assert!(result.groups[0].content.is_empty());
}

#[test]
fn overlapping_groupers_register_a_node_once() {
    let html = r#"<div class="a" id="same"><p>One</p></div>"#;
    let options = Options {
        element_groupers: vec![
            Selector::attr("class", "a"),
            Selector::attr("id", "same"),
        ],
        ..Options::default()
    };
    let result = match extract_with_options(html, &options) {
        Ok(result) => result,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(result.len(), 1);
    assert_eq!(
        result.groups[0].content.as_fragments(),
        Some(&["One".to_string()][..])
    );
}

#[test]
fn list_items_and_headings_are_block_boundaries() {
    let result = match extract("<body><h1>Title</h1><ul><li>First</li><li>Second</li></ul></body>")
    {
        Ok(result) => result,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    let fragments = result
        .by_tag("body")
        .and_then(|group| group.content.as_fragments());
    assert_eq!(
        fragments,
        Some(&["Title".to_string(), "First".to_string(), "Second".to_string()][..])
    );
}

#[test]
fn table_cells_are_block_boundaries() {
    let html = "<body><table><tr><td>Left</td><td>Right</td></tr></table></body>";
    let result = match extract(html) {
        Ok(result) => result,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    let fragments = result
        .by_tag("body")
        .and_then(|group| group.content.as_fragments());
    assert_eq!(fragments, Some(&["Left".to_string(), "Right".to_string()][..]));
}
