//! Undirected graph over bit positions, loaded from an adjacency matrix.
//!
//! The matrix comes out of a factor-graph optimization over dataset
//! columns: cell `(i, j)` true means bits `i` and `j` interact. Only the
//! connected component containing the prediction target is interesting;
//! everything else is discarded before rendering.

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

use crate::{Error, Result};

/// Undirected graph whose node weights are original bit positions.
#[derive(Clone, Debug, Default)]
pub struct BitGraph {
    pub graph: UnGraph<usize, ()>,
}

/// Component statistics logged before rendering.
#[derive(Clone, Copy, Debug)]
pub struct ComponentSummary {
    pub edges: usize,
    pub num_components: usize,
    pub largest: usize,
    pub retained: usize,
}

impl ComponentSummary {
    /// True when the whole graph was a single component.
    pub fn connected(&self) -> bool {
        self.num_components == 1
    }
}

impl BitGraph {
    /// Load a comma-delimited boolean adjacency matrix file.
    pub fn from_adjacency_file(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Self::from_reader(reader)
    }

    /// Parse an adjacency matrix from any line source.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let matrix = parse_matrix(reader)?;
        Ok(Self::from_matrix(&matrix))
    }

    /// Build the graph: one node per matrix row, an undirected edge where
    /// either triangle has a true cell. The diagonal is ignored and mirror
    /// duplicates collapse to a single edge.
    pub fn from_matrix(matrix: &[Vec<bool>]) -> Self {
        let n = matrix.len();
        let mut graph = UnGraph::default();
        let nodes: Vec<NodeIndex> = (0..n).map(|i| graph.add_node(i)).collect();
        for i in 0..n {
            for j in (i + 1)..n {
                if matrix[i][j] || matrix[j][i] {
                    graph.update_edge(nodes[i], nodes[j], ());
                }
            }
        }
        Self { graph }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Bit positions present in the graph, in node order.
    pub fn bits(&self) -> Vec<usize> {
        self.graph.node_indices().map(|ix| self.graph[ix]).collect()
    }

    /// Keep only the connected component containing `bit`, logging the
    /// component statistics of the full graph on the way.
    ///
    /// Errors when `bit` labels no node.
    pub fn retain_component_of(&self, bit: usize) -> Result<(BitGraph, ComponentSummary)> {
        let target = self
            .graph
            .node_indices()
            .find(|&ix| self.graph[ix] == bit)
            .ok_or(Error::MissingReferenceBit(bit))?;

        let mut uf = UnionFind::<usize>::new(self.graph.node_count());
        for edge in self.graph.edge_references() {
            uf.union(edge.source().index(), edge.target().index());
        }
        let labels = uf.into_labeling();

        let mut sizes: HashMap<usize, usize> = HashMap::new();
        for &label in &labels {
            *sizes.entry(label).or_insert(0) += 1;
        }
        let target_label = labels[target.index()];

        let mut sub = UnGraph::default();
        let mut remap: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        for ix in self.graph.node_indices() {
            if labels[ix.index()] == target_label {
                remap.insert(ix, sub.add_node(self.graph[ix]));
            }
        }
        for edge in self.graph.edge_references() {
            if let (Some(&a), Some(&b)) = (remap.get(&edge.source()), remap.get(&edge.target())) {
                sub.update_edge(a, b, ());
            }
        }

        let summary = ComponentSummary {
            edges: self.graph.edge_count(),
            num_components: sizes.len(),
            largest: sizes.values().copied().max().unwrap_or(0),
            retained: sub.node_count(),
        };
        info!("the optimized network has {} edges", summary.edges);
        info!("  connected = {}", summary.connected());
        info!("  num connected components = {}", summary.num_components);
        info!("  largest component has {} nodes", summary.largest);
        info!("  component with bit {} has {} nodes", bit, summary.retained);

        Ok((Self { graph: sub }, summary))
    }
}

/// Parse comma-delimited boolean rows. Blank lines are skipped; the matrix
/// must come out square. Float-formatted booleans (`0.0`/`1.0`) are
/// accepted because upstream tooling writes them.
fn parse_matrix(reader: impl BufRead) -> Result<Vec<Vec<bool>>> {
    let mut rows = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for (col, field) in trimmed.split(',').enumerate() {
            row.push(parse_bool_field(field.trim()).ok_or_else(|| Error::Matrix {
                row: line_no + 1,
                reason: format!("unparsable field \"{}\" at column {}", field.trim(), col + 1),
            })?);
        }
        rows.push(row);
    }

    let n = rows.len();
    for (idx, row) in rows.iter().enumerate() {
        if row.len() != n {
            return Err(Error::Matrix {
                row: idx + 1,
                reason: format!("expected {} columns, found {}", n, row.len()),
            });
        }
    }
    Ok(rows)
}

fn parse_bool_field(field: &str) -> Option<bool> {
    match field {
        "0" | "0.0" | "false" | "False" => Some(false),
        "1" | "1.0" | "true" | "True" => Some(true),
        _ => None,
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn two_component_graph() -> BitGraph {
        // 0-1 and 2-3, nothing between the pairs
        let text = "0,1,0,0\n1,0,0,0\n0,0,0,1\n0,0,1,0\n";
        BitGraph::from_reader(Cursor::new(text)).unwrap()
    }

    #[test]
    fn test_build_counts() {
        let g = two_component_graph();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_retain_component_keeps_only_reachable_bits() {
        let g = two_component_graph();
        let (sub, summary) = g.retain_component_of(0).unwrap();
        let mut bits = sub.bits();
        bits.sort_unstable();
        assert_eq!(bits, vec![0, 1]);
        assert_eq!(summary.num_components, 2);
        assert!(!summary.connected());
        assert_eq!(summary.largest, 2);
        assert_eq!(summary.retained, 2);
    }

    #[test]
    fn test_retain_other_component() {
        let g = two_component_graph();
        let (sub, _) = g.retain_component_of(3).unwrap();
        let mut bits = sub.bits();
        bits.sort_unstable();
        assert_eq!(bits, vec![2, 3]);
    }

    #[test]
    fn test_missing_reference_bit() {
        let g = two_component_graph();
        let err = g.retain_component_of(10).unwrap_err();
        assert!(matches!(err, Error::MissingReferenceBit(10)));
    }

    #[test]
    fn test_isolated_node_is_own_component() {
        let text = "0,1,0\n1,0,0\n0,0,0\n";
        let g = BitGraph::from_reader(Cursor::new(text)).unwrap();
        let (sub, summary) = g.retain_component_of(2).unwrap();
        assert_eq!(sub.node_count(), 1);
        assert_eq!(summary.num_components, 2);
    }

    #[test]
    fn test_mirror_duplicates_collapse() {
        // Asymmetric entry plus its mirror still yields one edge
        let text = "0,1\n1,0\n";
        let g = BitGraph::from_reader(Cursor::new(text)).unwrap();
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_float_formatted_fields() {
        let text = "0.0,1.0\n1.0,0.0\n";
        let g = BitGraph::from_reader(Cursor::new(text)).unwrap();
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_non_square_matrix_is_rejected() {
        let text = "0,1\n1,0\n0,0\n";
        let err = BitGraph::from_reader(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, Error::Matrix { row: 1, .. }));
    }

    #[test]
    fn test_bad_field_is_rejected() {
        let text = "0,2\n1,0\n";
        let err = BitGraph::from_reader(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, Error::Matrix { row: 1, .. }));
    }

    #[test]
    fn test_connected_graph_summary() {
        let text = "0,1,1\n1,0,1\n1,1,0\n";
        let g = BitGraph::from_reader(Cursor::new(text)).unwrap();
        let (_, summary) = g.retain_component_of(1).unwrap();
        assert!(summary.connected());
        assert_eq!(summary.largest, 3);
        assert_eq!(summary.retained, 3);
    }
}
