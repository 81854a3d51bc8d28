/// helper functions for rendering
use crate::data::{Trace, Val};
use itertools::*;

pub fn rendervec(fs: &[String]) -> String {
    format!("[{}]", fs.join(", "))
}

pub fn rendervals(xs: &[Val]) -> String {
    rendervec(&xs.iter().map(|x| x.to_string()).collect_vec())
}
pub fn renderfloats(fs: &[f64], high_prec: bool) -> String {
    rendervec(&fs.iter().map(|x| fmt_f64(high_prec)(*x)).collect_vec())
}
pub fn fmt_f64(high_precision: bool) -> impl Fn(f64) -> String {
    move |x: f64| {
        if high_precision {
            format!("{}", x)
        } else {
            format!("{:.2}", x)
        }
    }
}

pub fn render_trace(t: &Trace) -> String {
    let samples = t
        .samples()
        .iter()
        .map(|s| format!("  {} ~ {} = {}", s.address, s.dist, s.value))
        .join("\n");
    format!(
        "{}\n  observes: {}\n  log_p: {:.6}",
        samples,
        rendervals(t.observes()),
        t.log_p()
    )
}
