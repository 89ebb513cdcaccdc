use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The closed vocabulary of resource kinds the tool knows how to draw.
/// Tokens double as identifier prefixes and icon file names, so they are
/// short lowercase forms rather than full API kind names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Ns,
    Ing,
    Svc,
    Pvc,
    Pod,
    Sts,
    Ds,
    Rs,
    Deploy,
    Job,
    CronJob,
    Sa,
}

impl ResourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ns => "ns",
            Self::Ing => "ing",
            Self::Svc => "svc",
            Self::Pvc => "pvc",
            Self::Pod => "pod",
            Self::Sts => "sts",
            Self::Ds => "ds",
            Self::Rs => "rs",
            Self::Deploy => "deploy",
            Self::Job => "job",
            Self::CronJob => "cronjob",
            Self::Sa => "sa",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "ns" => Some(Self::Ns),
            "ing" => Some(Self::Ing),
            "svc" => Some(Self::Svc),
            "pvc" => Some(Self::Pvc),
            "pod" => Some(Self::Pod),
            "sts" => Some(Self::Sts),
            "ds" => Some(Self::Ds),
            "rs" => Some(Self::Rs),
            "deploy" => Some(Self::Deploy),
            "job" => Some(Self::Job),
            "cronjob" => Some(Self::CronJob),
            "sa" => Some(Self::Sa),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vertical tiers of the rendered layout, top to bottom. Kinds sharing a
/// tier are pinned to the same rank; the namespace itself is the cluster
/// boundary and has no tier.
pub const RANK_TIERS: [&[ResourceKind]; 6] = [
    &[ResourceKind::Ing],
    &[ResourceKind::Svc],
    &[ResourceKind::Pvc, ResourceKind::Sa],
    &[ResourceKind::Pod],
    &[
        ResourceKind::Sts,
        ResourceKind::Ds,
        ResourceKind::Rs,
        ResourceKind::Job,
    ],
    &[ResourceKind::Deploy, ResourceKind::CronJob],
];

static KIND_TIERS: Lazy<HashMap<ResourceKind, usize>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (tier, kinds) in RANK_TIERS.iter().enumerate() {
        for &kind in *kinds {
            map.insert(kind, tier);
        }
    }
    map
});

/// Tier index for a kind, or None for kinds that are not ranked (`ns`).
pub fn rank_tier(kind: ResourceKind) -> Option<usize> {
    KIND_TIERS.get(&kind).copied()
}

/// Reference to another resource in the same namespace, used to draw
/// ownership edges (deploy -> rs -> pod and friends).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceRef {
    pub kind: ResourceKind,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub kind: ResourceKind,
    pub name: String,
    #[serde(default)]
    pub owners: Vec<ResourceRef>,
}

/// Hand-off format from the resource-discovery side: one namespace and
/// the resources it contains. Discovery itself lives outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub namespace: String,
    pub resources: Vec<Resource>,
}
