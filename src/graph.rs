use crate::config::{IconMode, RenderOptions};
use crate::icon::{IconError, IconResolver};
use crate::ident::{ClusterId, NodeId, RankId};
use crate::label::{namespace_label, resource_label};
use crate::resource::{Manifest, RANK_TIERS, ResourceKind, rank_tier};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Icon(#[from] IconError),
    #[error("resource {kind}/{name} collides with an earlier resource (identifier {id})")]
    IdentifierCollision {
        kind: ResourceKind,
        name: String,
        id: String,
    },
    #[error("owner {owner_kind}/{owner_name} of {kind}/{name} is not in the manifest")]
    UnknownOwner {
        owner_kind: ResourceKind,
        owner_name: String,
        kind: ResourceKind,
        name: String,
    },
}

/// Assembles the complete DOT document for one namespace: rank
/// scaffolding for vertical ordering, the namespace cluster with one
/// labeled node per resource, and ownership edges.
pub struct DotGraph {
    manifest: Manifest,
    resolver: IconResolver,
    icon_mode: IconMode,
}

impl DotGraph {
    pub fn new(manifest: Manifest, options: &RenderOptions) -> Self {
        Self {
            manifest,
            resolver: IconResolver::new(&options.icons_dir),
            icon_mode: options.icon_mode,
        }
    }

    pub fn to_dot(&mut self) -> Result<String, GraphError> {
        self.validate()?;

        let mut dot = String::new();
        dot.push_str("digraph G {\n");
        dot.push_str("  rankdir=TB;\n");

        // One invisible anchor node per tier, each pinned in its own rank
        // subgraph, chained by invisible edges to force the tier order.
        for tier in 0..RANK_TIERS.len() {
            let rank = RankId::new(tier);
            let anchor = NodeId::rank_anchor(tier);
            dot.push_str(&format!(
                "  subgraph {rank} {{ rank=same; {anchor} [style=invis, height=0, width=0, margin=0]; }}\n"
            ));
        }
        for tier in 0..RANK_TIERS.len() - 1 {
            dot.push_str(&format!(
                "  {} -> {} [style=invis];\n",
                NodeId::rank_anchor(tier),
                NodeId::rank_anchor(tier + 1)
            ));
        }

        let cluster = ClusterId::for_namespace(&self.manifest.namespace);
        let ns_label =
            namespace_label(&mut self.resolver, &self.manifest.namespace, self.icon_mode)?;
        dot.push_str(&format!("  subgraph {cluster} {{\n"));
        dot.push_str(&format!("    label={ns_label};\n"));
        dot.push_str("    labeljust=l;\n");

        for res in &self.manifest.resources {
            let id = NodeId::for_resource(res.kind, &res.name);
            let label = resource_label(&mut self.resolver, res.kind, &res.name, self.icon_mode)?;
            dot.push_str(&format!("    {id} [label={label}, penwidth=0];\n"));
        }
        dot.push_str("  }\n");

        // Bind each resource to its tier's anchor so kinds line up.
        let mut tier_members: HashMap<usize, Vec<NodeId>> = HashMap::new();
        for res in &self.manifest.resources {
            if let Some(tier) = rank_tier(res.kind) {
                tier_members
                    .entry(tier)
                    .or_default()
                    .push(NodeId::for_resource(res.kind, &res.name));
            }
        }
        for tier in 0..RANK_TIERS.len() {
            let Some(members) = tier_members.get(&tier) else {
                continue;
            };
            let names: Vec<&str> = members.iter().map(|id| id.as_str()).collect();
            dot.push_str(&format!(
                "  {{rank=same; {}; {};}}\n",
                NodeId::rank_anchor(tier),
                names.join("; ")
            ));
        }

        for res in &self.manifest.resources {
            let to = NodeId::for_resource(res.kind, &res.name);
            for owner in &res.owners {
                let from = NodeId::for_resource(owner.kind, &owner.name);
                dot.push_str(&format!("  {from} -> {to};\n"));
            }
        }

        dot.push_str("}\n");
        Ok(dot)
    }

    /// Rejects manifests whose escaped identifiers collide (names must be
    /// escape-unique within a kind) and owner references that point
    /// outside the manifest.
    fn validate(&self) -> Result<(), GraphError> {
        let mut seen: HashSet<String> = HashSet::new();
        for res in &self.manifest.resources {
            let id = NodeId::for_resource(res.kind, &res.name);
            if !seen.insert(id.as_str().to_string()) {
                return Err(GraphError::IdentifierCollision {
                    kind: res.kind,
                    name: res.name.clone(),
                    id: id.as_str().to_string(),
                });
            }
        }
        for res in &self.manifest.resources {
            for owner in &res.owners {
                let owner_id = NodeId::for_resource(owner.kind, &owner.name);
                if !seen.contains(owner_id.as_str()) {
                    return Err(GraphError::UnknownOwner {
                        owner_kind: owner.kind,
                        owner_name: owner.name.clone(),
                        kind: res.kind,
                        name: res.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
