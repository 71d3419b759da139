use clap::Parser;
use nrx_sim::cli::{log_filter, Cli, Command};
use nrx_sim::commands::loops;
use tracing_subscriber::filter::LevelFilter;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args.iter().copied()).expect("arguments parse")
}

#[test]
fn pragma_with_commas_stays_one_annotation() {
    let cli = parse(&[
        "nrx-sim", "loops", "--index", "i0", "--lower", "0", "--upper", "N", "--incr", "1",
        "--pragma", "#pragma omp parallel for private(a,b) reduction(+:x,y)",
    ]);
    let Command::Loops(args) = cli.command else {
        panic!("expected loops command");
    };
    assert_eq!(args.pragma.len(), 1);
    let text = loops::render(&args).expect("single level");
    assert_eq!(
        text.header,
        "#pragma omp parallel for private(a,b) reduction(+:x,y)\nfor(int i0=0; i0<N; i0++) {\n"
    );
}

#[test]
fn pragma_repeats_once_per_level() {
    let cli = parse(&[
        "nrx-sim", "loops", "--index", "i0,i1", "--lower", "0,0", "--upper", "Nx0,Nx1",
        "--pragma", "", "--pragma", "#pragma omp parallel for",
    ]);
    let Command::Loops(args) = cli.command else {
        panic!("expected loops command");
    };
    let text = loops::render(&args).expect("two levels");
    assert_eq!(
        text.header,
        "for(int i0=0; i0<Nx0; i0++) {\n    #pragma omp parallel for\n    for(int i1=0; i1<Nx1; i1++) {\n"
    );
}

#[test]
fn verbose_count_is_global() {
    let cli = parse(&["nrx-sim", "psi4", "--flat", "-vv"]);
    assert_eq!(cli.verbose, 2);
    assert!(matches!(cli.command, Command::Psi4(ref args) if args.flat));
}

#[test]
fn rust_log_overrides_verbosity() {
    assert_eq!(log_filter(0, Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
    assert_eq!(log_filter(3, Some("error")).max_level_hint(), Some(LevelFilter::ERROR));
}

#[test]
fn verbosity_applies_without_rust_log() {
    assert_eq!(log_filter(0, None).max_level_hint(), Some(LevelFilter::WARN));
    assert_eq!(log_filter(1, None).max_level_hint(), Some(LevelFilter::INFO));
    assert_eq!(log_filter(2, None).max_level_hint(), Some(LevelFilter::DEBUG));
    assert_eq!(log_filter(7, None).max_level_hint(), Some(LevelFilter::TRACE));
}

#[test]
fn invalid_rust_log_falls_back_to_verbosity() {
    assert_eq!(log_filter(2, Some("nrx=loudest")).max_level_hint(), Some(LevelFilter::DEBUG));
}
