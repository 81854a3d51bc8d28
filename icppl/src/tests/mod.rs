use crate::tests::checks::*;
use crate::tests::models::*;
use crate::*;
use crate::Position;

use itertools::*;
use tracing_test::*;


#[test]
#[traced_test]
fn gaussian_end_to_end() {
    let mut st = State::seeded(0);
    let (x, tr) = st.trace_program("gaussian", gaussian).unwrap();

    assert_eq!(tr.len(), 1);
    let s = &tr.samples()[0];
    assert_eq!(s.address.path, vec!["gaussian", "x"]);
    assert!(s.address.to_string().ends_with("/gaussian.x"));
    assert!(matches!(s.address.position, Position::Static { .. }));
    assert_eq!(s.dist, Dist::Normal(0.0, 1.0));
    assert_eq!(float(&s.value), x);

    assert_eq!(tr.observes(), &[Val::Float(2.0)]);
    assert_eq!(tr.packed_observes(), &[2.0]);
    let expected = Dist::Normal(x, 1.0).log_pdf(&Val::Float(2.0)).unwrap();
    check_close("gaussian/log_p", expected, tr.log_p(), 1e-12);
    assert!(!st.is_tracing());
}

#[test]
fn begin_twice_is_rejected() {
    let mut st = State::seeded(0);
    st.begin_trace("model").unwrap();
    assert_eq!(
        st.begin_trace("other"),
        Err(TraceError::AlreadyActive("model".to_string()))
    );
    // the first trace is still the active one
    assert_eq!(st.root(), Some("model"));
    assert!(st.end_trace().is_ok());
}

#[test]
fn end_without_begin_is_rejected() {
    let mut st = State::seeded(0);
    assert_eq!(st.end_trace().err(), Some(TraceError::NoActiveTrace()));
    st.begin_trace("model").unwrap();
    st.end_trace().unwrap();
    assert_eq!(st.end_trace().err(), Some(TraceError::NoActiveTrace()));
}

#[test]
fn traces_run_back_to_back() {
    let mut st = State::seeded(3);
    let mut lens = vec![];
    for _ in 0..5 {
        let (_, tr) = st.trace_program("branching", branching).unwrap();
        lens.push(tr.len());
        assert_eq!(st.root(), None);
    }
    assert!(lens.iter().all(|n| *n == 2), "{:?}", lens);
}

#[test]
fn failing_program_releases_the_slot() {
    let mut st = State::seeded(0);
    let r = st.trace_program("model", |st| -> Result<()> {
        st.sample(&Dist::Normal(0.0, 1.0))?;
        errors::program("gave up")
    });
    assert_eq!(r.err(), Some(TraceError::Program("gave up".to_string())));
    assert!(!st.is_tracing());
    assert!(st.begin_trace("model").is_ok());
}

#[test]
fn program_error_survives_an_early_end() {
    let mut st = State::seeded(0);
    let r = st.trace_program("model", |st| -> Result<()> {
        st.sample(&Dist::Bern(0.5))?;
        let tr = st.end_trace()?;
        assert_eq!(tr.len(), 1);
        errors::program("boom")
    });
    assert_eq!(r.err(), Some(TraceError::Program("boom".to_string())));
    assert!(!st.is_tracing());
    assert!(st.begin_trace("model").is_ok());
}

#[test]
fn mode_names() {
    assert_eq!("inference".parse::<Mode>(), Ok(Mode::Inference));
    assert_eq!("Compilation".parse::<Mode>(), Ok(Mode::Compilation));
    assert_eq!("compiled-inference".parse::<Mode>(), Ok(Mode::CompiledInference));
    assert_eq!(
        "training".parse::<Mode>(),
        Err(TraceError::InvalidMode("training".to_string()))
    );
    for m in [Mode::Inference, Mode::Compilation, Mode::CompiledInference] {
        assert_eq!(m.to_string().parse::<Mode>(), Ok(m));
    }

    let mut st = State::seeded(0);
    assert!(st.set_mode_named("bogus").is_err());
    assert_eq!(st.mode(), Mode::Inference);
    st.set_mode_named("compilation").unwrap();
    assert_eq!(st.mode(), Mode::Compilation);
}

#[test]
fn options_configure_the_state() {
    let opts = Options::seed(7).with_mode(Mode::Compilation);
    let st = State::new(&opts);
    assert_eq!(st.mode(), Mode::Compilation);
    assert!(!st.has_artifact());

    // same seed, same draws
    let run = |opts: &Options| {
        let mut st = State::new(opts);
        (0..5)
            .map(|_| st.sample(&Dist::Normal(0.0, 1.0)).unwrap().as_f64())
            .collect_vec()
    };
    assert_eq!(run(&Options::seed(11)), run(&Options::seed(11)));
    assert_ne!(run(&Options::seed(11)), run(&Options::seed(12)));
}
