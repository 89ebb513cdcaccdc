use crate::resource::ResourceKind;
use std::fmt;

/// Escapes a resource name so it is usable as a Graphviz identifier.
/// Both `.` and `-` become `_`; everything else passes through.
/// Idempotent: escaping an already-escaped name is a no-op.
pub fn escape_name(name: &str) -> String {
    name.replace(['.', '-'], "_")
}

/// Identifier of a single node in the generated document.
/// ex) `pod_my_pod`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(String);

impl NodeId {
    pub fn for_resource(kind: ResourceKind, name: &str) -> Self {
        Self(format!("{}_{}", kind.as_str(), escape_name(name)))
    }

    /// The invisible anchor node pinned inside a rank subgraph.
    /// Deliberately the bare decimal so it never collides with the
    /// prefixed subgraph identifier for the same rank.
    /// ex) `1`
    pub fn rank_anchor(rank: usize) -> Self {
        Self(rank.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of the cluster subgraph grouping a namespace.
/// ex) `cluster_my_namespace`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClusterId(String);

impl ClusterId {
    pub fn for_namespace(namespace: &str) -> Self {
        Self(format!("cluster_{}", escape_name(namespace)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a rank subgraph used to bias vertical layout.
/// ex) `rank_1`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RankId(String);

impl RankId {
    pub fn new(rank: usize) -> Self {
        Self(format!("rank_{rank}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
