use core::fmt;

use itertools::Itertools;
use log::warn;

use crate::baseline::BaselineTable;
use crate::datastructures::*;
use crate::error::{ReportError, Result};

/// Which value of a column pair is the best one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extremum {
    /// Lower is better
    #[default]
    Min,
    /// Higher is better
    Max,
}

impl Extremum {
    fn pick(self, values: &[f64]) -> Option<f64> {
        let fold = match self {
            Extremum::Min => f64::min,
            Extremum::Max => f64::max,
        };
        values.iter().copied().reduce(fold)
    }
}

/// A table value and whether it is marked as the best of its column pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Raw value
    pub value: f64,
    /// Rendered in bold
    pub highlighted: bool,
}

impl Cell {
    /// Format with `decimals` digits, wrapped in `\textbf` if highlighted.
    pub fn render(&self, decimals: usize) -> String {
        if self.highlighted {
            format!("\\textbf{{{:.*}}}", decimals, self.value)
        } else {
            format!("{:.*}", decimals, self.value)
        }
    }
}

/// Mark every value equal to the extremum of `values`.
pub fn highlight(values: &[f64], extremum: Extremum) -> Vec<Cell> {
    let best = extremum.pick(values);
    values
        .iter()
        .map(|&value| Cell {
            value,
            highlighted: Some(value) == best,
        })
        .collect()
}

/// [`highlight`] rendered with `decimals` digits, best values in bold.
pub fn highlight_best_result(
    values: &[f64],
    decimals: usize,
    extremum: Extremum,
) -> Vec<String> {
    highlight(values, extremum)
        .iter()
        .map(|cell| cell.render(decimals))
        .collect()
}

fn highlight_pair(values: [f64; 2], extremum: Extremum) -> [Cell; 2] {
    let cells = highlight(&values, extremum);
    [cells[0], cells[1]]
}

/// One instance of a [`ComparativeTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Instance id, e.g. `a5-48`
    pub instance: String,
    /// m
    pub vehicles: u32,
    /// n
    pub requests: u32,
    /// Mean of both solvers, in solver order
    pub mean: [Cell; 2],
    /// Best of both solvers, in solver order
    pub best: [Cell; 2],
}

/// Column averages over all rows.
#[derive(Debug, Clone, PartialEq)]
pub struct AverageRow {
    /// Average of the mean columns
    pub mean: [Cell; 2],
    /// Average of the best columns
    pub best: [Cell; 2],
}

/// Head-to-head comparison of two solvers on their common instances.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparativeTable {
    /// Column headers, left then right
    pub solvers: [Solver; 2],
    /// Sorted class letters of the compared instances
    pub instance_classes: Vec<char>,
    /// Ordered by (vehicles, requests)
    pub rows: Vec<TableRow>,
    /// Trailing `Avg.` row
    pub average: AverageRow,
}

/// Compare two result sets on the instances present in both. Instances
/// only one side has results for are left out of the table.
pub fn build_table(
    solver1: &str,
    values1: &ResultSet,
    solver2: &str,
    values2: &ResultSet,
    extremum: Extremum,
) -> Result<ComparativeTable> {
    let common = values1
        .iter()
        .filter_map(|(id, first)| Some((id, *first, *values2.get(id)?)))
        .collect_vec();
    if common.is_empty() {
        return Err(ReportError::DisjointInstanceSets {
            left: solver1.to_string(),
            right: solver2.to_string(),
        });
    }
    let dropped = values1.len() + values2.len() - 2 * common.len();
    if dropped > 0 {
        warn!("{dropped} instances are not shared by {solver1} and {solver2}");
    }

    let mut rows = Vec::with_capacity(common.len());
    for (id, first, second) in &common {
        let instance: InstanceId = id.parse()?;
        rows.push((
            instance,
            TableRow {
                instance: id.to_string(),
                vehicles: instance.vehicles,
                requests: instance.requests,
                mean: highlight_pair([first.mean, second.mean], extremum),
                best: highlight_pair([first.best, second.best], extremum),
            },
        ));
    }
    rows.sort_by(|(a, row_a), (b, row_b)| {
        (a.vehicles, a.requests, &row_a.instance).cmp(&(
            b.vehicles,
            b.requests,
            &row_b.instance,
        ))
    });
    let instance_classes = rows
        .iter()
        .map(|(instance, _)| instance.class)
        .unique()
        .sorted()
        .collect_vec();

    let count = common.len() as f64;
    let [mean1, mean2, best1, best2] = common.iter().fold(
        [0.0; 4],
        |[mean1, mean2, best1, best2], (_, first, second)| {
            [
                mean1 + first.mean,
                mean2 + second.mean,
                best1 + first.best,
                best2 + second.best,
            ]
        },
    );
    let average = AverageRow {
        mean: highlight_pair([mean1 / count, mean2 / count], extremum),
        best: highlight_pair([best1 / count, best2 / count], extremum),
    };

    Ok(ComparativeTable {
        solvers: [solver1.to_string(), solver2.to_string()],
        instance_classes,
        rows: rows.into_iter().map(|(_, row)| row).collect(),
        average,
    })
}

/// Compare a solver against a baseline, optionally on one instance class.
pub fn build_table_vs_baseline(
    solver: &str,
    values: &ResultSet,
    baseline: &BaselineTable,
    instance_class: Option<char>,
) -> Result<ComparativeTable> {
    let baseline = match instance_class {
        Some(class) => baseline.restrict_to_class(class),
        None => baseline.clone(),
    };
    build_table(
        solver,
        values,
        &baseline.solver,
        &baseline.values,
        Extremum::Min,
    )
}

impl ComparativeTable {
    /// Displayable LaTeX rendering, see [`LatexTable`].
    pub fn latex<'a>(
        &'a self,
        caption: &'a str,
        decimals: usize,
    ) -> LatexTable<'a> {
        LatexTable {
            table: self,
            caption,
            decimals,
        }
    }

    /// [`ComparativeTable::latex`] as a `String`.
    pub fn to_latex(&self, caption: &str, decimals: usize) -> String {
        self.latex(caption, decimals).to_string()
    }
}

/// LaTeX `tabular` rendering of a [`ComparativeTable`].
pub struct LatexTable<'a> {
    table: &'a ComparativeTable,
    caption: &'a str,
    decimals: usize,
}

impl fmt::Display for LatexTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.table;
        let cells = |mean: &[Cell; 2], best: &[Cell; 2]| {
            [mean[0], best[0], mean[1], best[1]]
                .iter()
                .map(|cell| cell.render(self.decimals))
                .join(" & ")
        };
        let classes = table.instance_classes.iter().join(", ");
        writeln!(f, "\\begin{{tabular}}{{|c|c|c|c|c|c|}} ")?;
        writeln!(f, "\\hline ")?;
        writeln!(
            f,
            "\\multicolumn{{6}}{{|c|}}{{\\textbf{{{}}}}} \\\\ ",
            self.caption
        )?;
        writeln!(f, "\\hline ")?;
        writeln!(
            f,
            "\\multicolumn{{2}}{{|c|}}{{\\textbf{{class}} ${classes}$}} & \
             \\multicolumn{{2}}{{|c|}}{{\\textbf{{{}}}}} & \
             \\multicolumn{{2}}{{|c|}}{{\\textbf{{{}}}}} \\\\ ",
            table.solvers[0], table.solvers[1]
        )?;
        writeln!(f, "\\hline ")?;
        writeln!(f, "m & n & Mean & Best & Mean & Best \\\\ ")?;
        writeln!(f, "\\hline ")?;
        for row in &table.rows {
            writeln!(
                f,
                "{} & {} & {} \\\\ ",
                row.vehicles,
                row.requests,
                cells(&row.mean, &row.best)
            )?;
        }
        writeln!(
            f,
            "\\hline \\multicolumn{{2}}{{|c|}}{{\\textit{{Avg.}}}} & {} \\\\ ",
            cells(&table.average.mean, &table.average.best)
        )?;
        writeln!(f, "\\hline ")?;
        writeln!(f, "\\end{{tabular}} ")
    }
}
