use crate::model::fiducial::FiducialDef;
use crate::report::{
    CENTER_SIG_FIGS, ParamSummary, ReportContext, format_fixed3, format_repr, round_to_n,
};

pub fn render_report_text(ctx: &ReportContext) -> String {
    let mut out = String::new();

    if ctx.uses_sample_mean() {
        out.push_str(&format!(
            "# using fiducial cosmology {} uncertainties, centered on the box-sample mean:\n",
            ctx.fiducial
        ));
    } else {
        out.push_str(&format!("# using fiducial cosmology {}:\n", ctx.fiducial));
    }
    out.push_str("#\n");
    for p in &ctx.params {
        out.push_str(&param_line(p));
        out.push('\n');
    }

    out.push_str("#\n");
    out.push_str("# column 1: box\n");
    out.push_str(&format!(
        "# column 2: rms distance from {}\n",
        if ctx.uses_sample_mean() {
            "mean"
        } else {
            "fiducial"
        }
    ));
    for (i, name) in ctx.columns.iter().enumerate() {
        out.push_str(&format!("# column {}: {}\n", i + 3, name));
    }
    out.push('\n');

    for row in &ctx.rows {
        let values = row
            .values
            .iter()
            .map(|v| format!("{:>10}", format_repr(*v)))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!(
            "{:>2} {} {}\n",
            row.box_index,
            format_fixed3(row.rms),
            values
        ));
    }

    out
}

fn param_line(p: &ParamSummary) -> String {
    let fiducial = format_repr(round_to_n(p.fiducial_center, CENTER_SIG_FIGS));
    let sigma = format_repr(p.sigma);
    match p.sample_mean {
        Some(mean) => {
            let mean = format_repr(round_to_n(mean, CENTER_SIG_FIGS));
            format!(
                "#  {:>6}: {:>7} ({:>7}) +/- {:>7}",
                p.name, fiducial, mean, sigma
            )
        }
        None => format!("#  {:>6}: {:>7} +/- {:>7}", p.name, fiducial, sigma),
    }
}

pub fn render_fiducial_catalog(catalog: &[FiducialDef]) -> String {
    let mut out = String::new();
    for def in catalog {
        out.push_str(&format!("{} ({})\n", def.id, def.source));
        for p in def.params {
            out.push_str(&format!(
                "  {:>6}: {:>7} +/- {:>7}\n",
                p.name,
                format_repr(p.center),
                format_repr(p.sigma)
            ));
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
