use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::algorithm::ShortestPathResult;
use crate::graph::DirectedGraph;
use crate::Result;

/// A node reference inside an edge list. JSON object keys are always strings,
/// but neighbors may be written as numbers (`[1, 4.0]`) or strings (`["1", 4.0]`).
/// Integral floats name the same node as the integer (`1.0` is `"1"`); other
/// floats use their shortest decimal form (`1.5` is `"1.5"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeRef {
    Number(i64),
    Float(f64),
    Name(String),
}

impl NodeRef {
    fn into_key(self) -> String {
        match self {
            NodeRef::Number(n) => n.to_string(),
            NodeRef::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => (f as i64).to_string(),
            NodeRef::Float(f) => f.to_string(),
            NodeRef::Name(name) => name,
        }
    }
}

/// JSON adjacency object: `{"0": [[1, 4.0], [2, 1.0]], "1": [], ...}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyList {
    pub nodes: BTreeMap<String, Vec<(NodeRef, f64)>>,
}

impl AdjacencyList {
    /// Parses an adjacency object from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses an adjacency object from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads and parses an adjacency file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Converts into a graph, failing on the first negative weight
    pub fn into_validated_graph(self) -> Result<DirectedGraph<String, OrderedFloat<f64>>> {
        let graph = self.into_graph();
        graph.validate_non_negative()?;
        Ok(graph)
    }

    /// Converts into a graph keyed by node name. Weights are not validated here.
    pub fn into_graph(self) -> DirectedGraph<String, OrderedFloat<f64>> {
        DirectedGraph::from_adjacency(self.nodes.into_iter().map(|(node, edges)| {
            let edges: Vec<_> = edges
                .into_iter()
                .map(|(target, weight)| (target.into_key(), OrderedFloat(weight)))
                .collect();
            (node, edges)
        }))
    }
}

/// Serializable view of a shortest-path run; unreachable nodes are `null`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceReport {
    pub source: String,
    pub distances: BTreeMap<String, Option<f64>>,
}

impl DistanceReport {
    pub fn from_result(result: &ShortestPathResult<String, OrderedFloat<f64>>) -> Self {
        let distances = result
            .distances
            .iter()
            .map(|(node, dist)| {
                let value = if dist.is_finite() { Some(dist.into_inner()) } else { None };
                (node.clone(), value)
            })
            .collect();

        DistanceReport {
            source: result.source.clone(),
            distances,
        }
    }

    /// Reported distances keyed by node, with unreachable nodes dropped
    pub fn reachable(&self) -> HashMap<&str, f64> {
        self.distances
            .iter()
            .filter_map(|(node, dist)| dist.map(|d| (node.as_str(), d)))
            .collect()
    }
}
