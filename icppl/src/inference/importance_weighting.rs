use crate::artifact::Artifact;
use crate::data::{Result, Trace};
use crate::inference::empirical::Empirical;
use crate::pipeline::Options;
use crate::state::{Mode, State};
use crate::utils::render::*;
use tracing::*;

/// Run `model` `steps` times, each under its own trace rooted at `root`, and
/// weight every result by its trace's log probability.
///
/// Without an artifact this is likelihood weighting under the prior. With one
/// and `Mode::CompiledInference`, choices come from the artifact's proposals
/// and the weights carry the p/q correction.
pub fn importance_sampling<'a, R, F>(
    steps: usize,
    opts: &Options,
    artifact: Option<&'a mut dyn Artifact>,
    root: &str,
    model: F,
) -> Result<Empirical<R>>
where
    F: Fn(&mut State<'a>) -> Result<R>,
{
    let mut state = State::new(opts);
    if let Some(artifact) = artifact {
        state.set_artifact(artifact);
    }
    let mut e = Empirical::empty();

    debug!("running with options: {:#?}", opts);
    for step in 1..=steps {
        if step % 100 == 1 {
            debug!("step: {step}");
        }
        let (out, tr) = state.trace_program(root, &model)?;
        trace!("trace:\n{}", render_trace(&tr));
        trace!("    log weight: {}", tr.log_weight().log_render());
        e.push(out, tr.log_weight());
    }
    if state.degraded_addresses() > 0 {
        warn!(
            "{} addresses resolved without reaching `{}`",
            state.degraded_addresses(),
            root
        );
    }
    debug!("{}", e.to_str());
    Ok(e)
}

/// Run `model` `steps` times in compilation mode and keep the traces. Every
/// observation in them is drawn from the model itself, which makes them
/// suitable training data for an artifact.
pub fn generate_traces<R, F>(
    steps: usize,
    opts: &Options,
    root: &str,
    model: F,
) -> Result<Vec<Trace>>
where
    F: for<'s> Fn(&mut State<'s>) -> Result<R>,
{
    let opts = opts.clone().with_mode(Mode::Compilation);
    let mut state = State::new(&opts);
    let mut traces = Vec::with_capacity(steps);
    for step in 1..=steps {
        if step % 100 == 1 {
            debug!("step: {step}");
        }
        let (_, tr) = state.trace_program(root, &model)?;
        traces.push(tr);
    }
    Ok(traces)
}
