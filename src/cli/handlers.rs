use std::{
    io::{self, Write, stdout},
    time::Instant,
};

use crate::{
    core::{
        bounds::{axis_size, terminal_width},
        config::AxisRangeOption,
        data::read_samples_from_path,
        error::AxisError,
        format::LabelFormat,
        range::AxisRange,
    },
    range_for_samples,
};

use super::parse::{GeometryArgs, RangeArgs, ScanArgs};

#[inline]
fn resolve_size(g: &GeometryArgs) -> usize {
    g.size.unwrap_or_else(|| axis_size(terminal_width()))
}

pub fn range(a: &RangeArgs) -> Result<(), AxisError> {
    let t0 = Instant::now();
    let opt = AxisRangeOption::builder(resolve_size(&a.geometry), a.geometry.divide_count)
        .min(a.min)
        .max(a.max)
        .boundary(a.geometry.boundary)
        .build()?;
    let axis = AxisRange::new(&opt)?;
    let format = LabelFormat {
        digits: a.digits,
        compact: a.compact,
    };
    let setup_us = t0.elapsed().as_micros();

    write_range_report(&mut stdout().lock(), &axis, &format)?;
    if a.geometry.debug {
        eprintln!("range setup: {setup_us} µs");
    }
    Ok(())
}

pub fn scan(a: &ScanArgs) -> Result<(), AxisError> {
    let t_ingest = Instant::now();
    let samples = read_samples_from_path(&a.file)?;
    let dur_ingest = t_ingest.elapsed().as_micros();

    let axis = range_for_samples(
        &samples,
        resolve_size(&a.geometry),
        a.geometry.divide_count,
        a.geometry.boundary,
    )?;

    let mut out = stdout().lock();
    write_summary(&mut out, &axis)?;
    write_sample_table(&mut out, &axis, &samples)?;
    if a.geometry.debug {
        eprintln!("sample ingest: {dur_ingest} µs   ({} rows)", samples.len());
    }
    Ok(())
}

fn write_summary(out: &mut impl Write, axis: &AxisRange) -> io::Result<()> {
    writeln!(
        out,
        "range [{}, {}]  unit {}  divisions {}  size {}px{}",
        axis.min(),
        axis.max(),
        axis.unit(),
        axis.divide_count(),
        axis.size(),
        if axis.boundary() { "  boundary" } else { "" }
    )
}

/// Summary line, one row per tick, one row per band.
pub(crate) fn write_range_report(
    out: &mut impl Write,
    axis: &AxisRange,
    format: &LabelFormat,
) -> io::Result<()> {
    write_summary(out, axis)?;

    writeln!(out, "{:>5}  {:>14}  {:>8}", "tick", "label", "height")?;
    for (i, (v, label)) in axis
        .tick_values()
        .into_iter()
        .zip(axis.values_with(format))
        .enumerate()
    {
        writeln!(out, "{i:>5}  {label:>14}  {:>8}", axis.height_from_value(v))?;
    }

    writeln!(out, "{:>5}  {:>21}  {:>13}", "band", "pixels", "split")?;
    let splits = axis.auto_divide();
    for (i, w) in splits.windows(2).enumerate() {
        let (lo, hi) = axis.get_range(i);
        writeln!(
            out,
            "{i:>5}  {lo:>9.2} .. {hi:>9.2}  {:>5} .. {:>5}",
            w[0], w[1]
        )?;
    }
    Ok(())
}

/// One row per sample: value, height, rest height, width.
pub(crate) fn write_sample_table(
    out: &mut impl Write,
    axis: &AxisRange,
    samples: &[f64],
) -> io::Result<()> {
    writeln!(
        out,
        "{:>14}  {:>8}  {:>8}  {:>8}",
        "value", "height", "rest", "width"
    )?;
    for &v in samples {
        writeln!(
            out,
            "{v:>14}  {:>8}  {:>8}  {:>8}",
            axis.height_from_value(v),
            axis.rest_height_from_value(v),
            axis.width_from_value(v)
        )?;
    }
    Ok(())
}

/// Print handy invocations for new users.
pub fn examples() {
    println!("{}", examples_text());
}

fn examples_text() -> String {
    let bin = "axis-range";
    format!(
        "
Example invocations
-------------------
• Basic range      : {bin} range --min 0 --max 90 --size 300
• Negative bounds  : {bin} range --min -5 --max 50 --divide-count 6
• Category bands   : {bin} range --min 0 --max 12 --divide-count 4 --boundary
• Compact labels   : {bin} range --min 0 --max 2500000 --compact
• Samples from file: {bin} scan samples.txt --size 400
• Samples on stdin : seq 1 50 | {bin} scan - --divide-count 5 --debug
"
    )
}
