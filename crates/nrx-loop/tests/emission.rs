use nrx_core::NrxError;
use nrx_loop::{emit, loop_1d, LoopColumns, LoopLevel, LoopNest};
use proptest::prelude::*;

#[test]
fn two_level_nest_with_inner_pragma() {
    let text = emit(
        &["i0", "i1"],
        &["0", "0"],
        &["Nx0", "Nx1"],
        &["1", "1"],
        &["", "#pragma omp parallel for"],
    )
    .expect("valid columns");
    assert_eq!(
        text.header,
        "for(int i0=0; i0<Nx0; i0++) {\n    #pragma omp parallel for\n    for(int i1=0; i1<Nx1; i1++) {\n"
    );
    assert_eq!(
        text.footer,
        "    } // END LOOP: for(int i1=0; i1<Nx1; i1++)\n} // END LOOP: for(int i0=0; i0<Nx0; i0++)\n"
    );
}

#[test]
fn mismatched_columns_are_rejected() {
    let err = emit(&["i0", "i1"], &["0"], &["Nx0", "Nx1"], &["1", "1"], &["", ""])
        .expect_err("lower column is short");
    match err {
        NrxError::Config(info) => {
            assert_eq!(info.code, "loop-columns");
            assert_eq!(info.context.get("index").map(String::as_str), Some("2"));
            assert_eq!(info.context.get("lower").map(String::as_str), Some("1"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn non_unit_increment_uses_compound_assignment() {
    let level = LoopLevel::new("i2", "NGHOSTS", "Nxx_plus_2NGHOSTS2-NGHOSTS").step("2");
    assert_eq!(
        level.statement(),
        "for(int i2=NGHOSTS; i2<Nxx_plus_2NGHOSTS2-NGHOSTS; i2+=2)"
    );
}

#[test]
fn single_loop_at_depth() {
    let text = loop_1d(&LoopLevel::new("k", "a", "b").parallel("#pragma simd"), 2);
    assert_eq!(text.header, "        #pragma simd\n        for(int k=a; k<b; k++) {\n");
    assert_eq!(text.footer, "        } // END LOOP: for(int k=a; k<b; k++)\n");
}

#[test]
fn empty_nest_renders_nothing() {
    let text = LoopNest::default().render();
    assert!(text.header.is_empty());
    assert!(text.footer.is_empty());
}

#[test]
fn yaml_columns_drive_the_nest() {
    let doc = r##"
index: [i0, i1, i2]
lower: ["0", "0", "0"]
upper: [N0, N1, N2]
increment: ["1", "1", "4"]
pragma: ["#pragma omp parallel for", "", ""]
"##;
    let columns = LoopColumns::from_yaml_str(doc).expect("parse");
    let nest = columns.to_nest().expect("consistent");
    assert_eq!(nest.depth(), 3);
    assert_eq!(nest.levels()[0].pragma.as_deref(), Some("#pragma omp parallel for"));
    assert_eq!(nest.levels()[1].pragma, None);
    let text = nest.render();
    assert!(text.header.starts_with("#pragma omp parallel for\nfor(int i0=0; i0<N0; i0++) {\n"));
    assert!(text.header.ends_with("        for(int i2=0; i2<N2; i2+=4) {\n"));
}

#[test]
fn malformed_yaml_is_a_config_error() {
    let err = LoopColumns::from_yaml_str("index: 3\n").expect_err("not a list");
    assert!(matches!(err, NrxError::Config(ref info) if info.code == "loop-config"));
}

fn level_strategy() -> impl Strategy<Value = LoopLevel> {
    (
        "[a-z][a-z0-9]{0,3}",
        "[0-9]{1,2}",
        "N[a-z0-9]{0,3}",
        prop_oneof![Just("1".to_string()), "[2-9]"],
        prop_oneof![Just(String::new()), Just("#pragma omp parallel for".to_string())],
    )
        .prop_map(|(index, lower, upper, incr, pragma)| {
            LoopLevel::new(index, lower, upper).step(incr).parallel(pragma)
        })
}

proptest! {
    #[test]
    fn footer_mirrors_header(levels in proptest::collection::vec(level_strategy(), 0..6)) {
        let nest = LoopNest::new(levels.clone());
        let text = nest.render();

        let openings: Vec<&str> = text
            .header
            .lines()
            .filter(|line| line.trim_start().starts_with("for("))
            .collect();
        let closings: Vec<&str> = text.footer.lines().collect();
        prop_assert_eq!(openings.len(), levels.len());
        prop_assert_eq!(closings.len(), levels.len());

        for (i, opening) in openings.iter().enumerate() {
            let closing = closings[levels.len() - 1 - i];
            let open_indent = opening.len() - opening.trim_start().len();
            let close_indent = closing.len() - closing.trim_start().len();
            prop_assert_eq!(open_indent, 4 * i);
            prop_assert_eq!(close_indent, 4 * i);
            let statement = opening.trim_start().trim_end_matches(" {");
            prop_assert!(closing.ends_with(statement));
        }

        let pragmas = levels.iter().filter(|level| level.pragma.is_some()).count();
        prop_assert_eq!(text.header.lines().count(), levels.len() + pragmas);
        prop_assert_eq!(nest.render(), text);
    }
}
