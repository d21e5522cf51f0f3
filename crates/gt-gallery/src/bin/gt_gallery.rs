use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use gt_contain::{ContainmentDag, contain};
use gt_core::NdArray;
use gt_label::{Labeling, Pattern, PatternRegistry, label_regions};

#[derive(Parser, Debug)]
#[command(name = "gt_gallery")]
#[command(about = "Run grid-topology pipelines on JSON fixtures")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Label the regions of an array and report the label grid.
    #[command(name = "label")]
    Label(InputArgs),
    /// Build the full containment DAG and report depths, edges and the
    /// nested tree.
    #[command(name = "dag")]
    Dag(InputArgs),
    /// Built-in nested-rings fixture: n concentric square rings.
    #[command(name = "rings")]
    Rings(RingsArgs),
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    /// Write the JSON report here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "axis")]
    connectivity: Connectivity,
}

#[derive(Args, Debug, Clone)]
struct InputArgs {
    #[command(flatten)]
    common: CommonArgs,
    /// JSON file: {"shape": [...], "data": [...], "background": [...]}.
    #[arg(long, required = true)]
    input: PathBuf,
}

#[derive(Args, Debug, Clone)]
struct RingsArgs {
    #[command(flatten)]
    common: CommonArgs,
    #[arg(long, default_value_t = 9)]
    side: usize,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Connectivity {
    /// Axis-aligned immediate neighbors (2·rank offsets).
    Axis,
    /// Full 3^rank box around each cell.
    Box,
}

#[derive(Debug, Clone, Deserialize)]
struct ArraySpec {
    shape: Vec<usize>,
    data: Vec<i64>,
    #[serde(default)]
    background: Vec<i64>,
}

#[derive(Debug, Clone, Serialize)]
struct LabelReport {
    shape: Vec<usize>,
    num_labels: u32,
    labels: Vec<u32>,
    values: Vec<i64>,
}

#[derive(Debug, Clone, Serialize)]
struct DagNodeDto {
    label: u32,
    value: i64,
    depth: u32,
    touches_exterior: bool,
    parents: Vec<u32>,
    children: Vec<u32>,
}

#[derive(Debug, Clone, Serialize)]
struct TreeNodeDto {
    id: usize,
    label: u32,
    children: Vec<usize>,
}

#[derive(Debug, Clone, Serialize)]
struct DagReport {
    shape: Vec<usize>,
    num_labels: u32,
    max_depth: Option<u32>,
    roots: Vec<u32>,
    nodes: Vec<DagNodeDto>,
    tree_roots: Vec<usize>,
    tree: Vec<TreeNodeDto>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Label(args) => {
            let (array, background) = load_spec(&args.input)?;
            let registry = registry_for(args.common.connectivity, array.rank())?;
            let labeling = label_regions(&array, &registry, &background)
                .context("labeling failed")?;
            let report = label_report(&array, &labeling);
            emit(&args.common.out, &report)
        }
        Command::Dag(args) => {
            let (array, background) = load_spec(&args.input)?;
            let registry = registry_for(args.common.connectivity, array.rank())?;
            let (labeling, dag) =
                contain(&array, &registry, &background).context("pipeline failed")?;
            let report = dag_report(&array, &labeling, &dag)?;
            emit(&args.common.out, &report)
        }
        Command::Rings(args) => {
            if args.side == 0 {
                bail!("rings fixture needs side > 0");
            }
            let array = nested_rings(args.side);
            let registry = registry_for(args.common.connectivity, 2)?;
            let (labeling, dag) =
                contain(&array, &registry, &HashSet::new()).context("pipeline failed")?;
            let report = dag_report(&array, &labeling, &dag)?;
            emit(&args.common.out, &report)
        }
    }
}

fn load_spec(path: &PathBuf) -> Result<(NdArray<i64>, HashSet<i64>)> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let spec: ArraySpec = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;

    let array = NdArray::from_vec(spec.shape, spec.data)
        .context("array spec shape/data mismatch")?;
    Ok((array, spec.background.into_iter().collect()))
}

fn registry_for(connectivity: Connectivity, rank: usize) -> Result<PatternRegistry<i64>> {
    let pattern = match connectivity {
        Connectivity::Axis => Pattern::axis_neighbors(rank),
        Connectivity::Box => Pattern::box_neighbors(rank),
    }
    .context("building the connectivity pattern")?;
    Ok(PatternRegistry::new(pattern))
}

fn nested_rings(side: usize) -> NdArray<i64> {
    let mut data = Vec::with_capacity(side * side);
    for i in 0..side {
        for j in 0..side {
            let ring = i.min(j).min(side - 1 - i).min(side - 1 - j);
            data.push(ring as i64 + 1);
        }
    }

    NdArray::from_vec(vec![side, side], data).expect("valid rings array")
}

fn label_report(array: &NdArray<i64>, labeling: &Labeling<i64>) -> LabelReport {
    LabelReport {
        shape: array.shape().to_vec(),
        num_labels: labeling.num_labels(),
        labels: labeling.labels().data().to_vec(),
        values: (1..=labeling.num_labels())
            .map(|l| *labeling.value_of(l))
            .collect(),
    }
}

fn dag_report(
    array: &NdArray<i64>,
    labeling: &Labeling<i64>,
    dag: &ContainmentDag,
) -> Result<DagReport> {
    let tree = dag.materialize().context("materializing the nested tree")?;

    let nodes = (1..=dag.num_labels())
        .map(|label| DagNodeDto {
            label,
            value: *labeling.value_of(label),
            depth: dag.depth(label),
            touches_exterior: dag.graph().touches_exterior(label),
            parents: dag.parents(label).iter().copied().collect(),
            children: dag.children(label).iter().copied().collect(),
        })
        .collect();

    let tree_nodes = (0..tree.len())
        .map(|id| TreeNodeDto {
            id,
            label: tree.node(id).label,
            children: tree.node(id).children.clone(),
        })
        .collect();

    Ok(DagReport {
        shape: array.shape().to_vec(),
        num_labels: dag.num_labels(),
        max_depth: dag.max_depth(),
        roots: dag.roots().to_vec(),
        nodes,
        tree_roots: tree.roots().to_vec(),
        tree: tree_nodes,
    })
}

fn emit<T: Serialize>(out: &Option<PathBuf>, report: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serializing report")?;
    match out {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("writing {}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}
