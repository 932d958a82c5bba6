//! One function per subcommand: read the inputs, run the library step, write
//! the artifact.  Every failure is wrapped with the path it concerns.

use std::path::Path;

use anyhow::{bail, Context, Result};
use log::info;

use tn_core::{id_from_f64, DemandMap, NodeId};
use tn_output::{
    write_demand_features, write_geo_nodes_csv, write_link_features, write_links_csv, write_matrix_csv,
    write_od_csv, write_point_features, write_trips, FeatureStyle,
};
use tn_reader::{read_geo_nodes, read_matrix, read_net, read_nodes, read_od_csv, read_trips};
use tn_spatial::{join_demand, join_links, project_nodes, remap_results, GeoBounds, JoinStrategy, NodeTable};

/// Property names of the `[capacity, length, free_flow_time]` feature row.
pub const LINK_ATTRIBUTES: [&str; 3] = ["capacity", "length", "fftt"];

/// Color used when no color file is given (blue bucket).
pub const DEFAULT_COLOR: f64 = 0.0;

// ── Canonical conversions ─────────────────────────────────────────────────────

pub fn net(input: &Path, output: &Path) -> Result<()> {
    let net = read_net(input).with_context(|| format!("reading net file {}", input.display()))?;
    write_links_csv(output, &net.links).with_context(|| format!("writing {}", output.display()))?;
    info!("{} links: {} -> {}", net.links.len(), input.display(), output.display());
    Ok(())
}

pub fn trips(input: &Path, output: &Path) -> Result<()> {
    let trips = read_trips(input).with_context(|| format!("reading trips file {}", input.display()))?;
    write_od_csv(output, &trips.demand).with_context(|| format!("writing {}", output.display()))?;
    info!(
        "{} OD pairs, total flow {}: {} -> {}",
        trips.demand.pair_count(),
        trips.demand.total(),
        input.display(),
        output.display()
    );
    Ok(())
}

pub fn nodes(input: &Path, output: &Path, bounds: GeoBounds) -> Result<()> {
    let planar = read_nodes(input).with_context(|| format!("reading node file {}", input.display()))?;
    let geo = project_nodes(&planar, bounds).with_context(|| format!("projecting {}", input.display()))?;
    write_geo_nodes_csv(output, &geo).with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}

pub fn od_to_trips(input: &Path, output: &Path) -> Result<()> {
    let rows = read_od_csv(input).with_context(|| format!("reading OD table {}", input.display()))?;
    write_trips(output, &rows).with_context(|| format!("writing {}", output.display()))?;
    info!("{} zones written to {}", DemandMap::from_rows(&rows).origin_count(), output.display());
    Ok(())
}

// ── Viewer artifacts ──────────────────────────────────────────────────────────

pub fn links_js(
    net_path:  &Path,
    node_path: &Path,
    output:    &Path,
    colors:    Option<&Path>,
    weights:   Option<&Path>,
    strategy:  JoinStrategy,
) -> Result<()> {
    let net = read_net(net_path).with_context(|| format!("reading net file {}", net_path.display()))?;
    let table = geo_table(node_path)?;
    let joined = join_links(&net.links, &table, &net.feature_table(), strategy)
        .with_context(|| format!("joining {} with {}", net_path.display(), node_path.display()))?;

    let style = link_style(colors, weights, joined.len())?;
    write_link_features(output, &joined, &LINK_ATTRIBUTES, &style)
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}

pub fn demand_js(node_path: &Path, od_path: &Path, output: &Path) -> Result<()> {
    let table = geo_table(node_path)?;
    let rows = read_od_csv(od_path).with_context(|| format!("reading OD table {}", od_path.display()))?;
    let joined = join_demand(&table, &rows)
        .with_context(|| format!("joining {} with {}", od_path.display(), node_path.display()))?;

    let style = FeatureStyle::uniform(DEFAULT_COLOR, joined.len());
    write_demand_features(output, &joined, &style).with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}

pub fn nodes_js(node_path: &Path, output: &Path) -> Result<()> {
    let table = geo_table(node_path)?;
    let style = FeatureStyle::uniform(DEFAULT_COLOR, table.len());
    write_point_features(output, table.rows(), &style).with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}

// ── Solver results ────────────────────────────────────────────────────────────

/// Reorder `[a, b, value]` solver rows onto the link order of a canonical
/// link CSV and write one value per line.
pub fn results(raw_path: &Path, links_path: &Path, output: &Path) -> Result<()> {
    let raw: Vec<[f64; 3]> = read_matrix(raw_path, false)
        .with_context(|| format!("reading results {}", raw_path.display()))?
        .into_iter()
        .enumerate()
        .map(|(i, row)| match row[..] {
            [a, b, v] => Ok([a, b, v]),
            _ => bail!("{}: row {} has {} columns, expected 3", raw_path.display(), i + 1, row.len()),
        })
        .collect::<Result<_>>()?;

    let links = read_matrix(links_path, true)
        .with_context(|| format!("reading link table {}", links_path.display()))?
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let (Some(&a), Some(&b)) = (row.get(1), row.get(2)) else {
                bail!("{}: row {} lacks A/B columns", links_path.display(), i + 1);
            };
            Ok((NodeId(id_from_f64(a)?), NodeId(id_from_f64(b)?)))
        })
        .collect::<Result<Vec<_>>>()?;

    let values: Vec<[f64; 1]> = remap_results(&links, &raw).into_iter().map(|v| [v]).collect();
    write_matrix_csv(output, &values).with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn geo_table(path: &Path) -> Result<NodeTable> {
    let nodes = read_geo_nodes(path).with_context(|| format!("reading projected nodes {}", path.display()))?;
    Ok(NodeTable::new(nodes))
}

fn link_style(colors: Option<&Path>, weights: Option<&Path>, n: usize) -> Result<FeatureStyle> {
    let colors = match colors {
        Some(path) => first_column(path)?,
        None => vec![DEFAULT_COLOR; n],
    };
    let weights = weights.map(first_column).transpose()?;
    Ok(FeatureStyle { colors, weights })
}

/// First column of a headerless numeric table.
fn first_column(path: &Path) -> Result<Vec<f64>> {
    read_matrix(path, false)
        .with_context(|| format!("reading {}", path.display()))?
        .into_iter()
        .enumerate()
        .map(|(i, row)| match row.first() {
            Some(&v) => Ok(v),
            None => bail!("{}: row {} is empty", path.display(), i + 1),
        })
        .collect()
}
