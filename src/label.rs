use crate::config::IconMode;
use crate::icon::{IconError, IconResolver};
use crate::resource::ResourceKind;

/// Escapes text for embedding inside the HTML-like label markup, so a
/// resource name containing quotes or angle brackets cannot corrupt the
/// generated document.
pub fn escape_label_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Builds the HTML-like table label for a resource: icon cell above a
/// text cell, borderless.
/// ex)
///   `<<TABLE BORDER="0"><TR><TD><IMG SRC="icons/pod-128.png" /></TD></TR><TR><TD>my-pod</TD></TR></TABLE>>`
pub fn resource_label(
    resolver: &mut IconResolver,
    kind: ResourceKind,
    name: &str,
    mode: IconMode,
) -> Result<String, IconError> {
    let icon = match mode {
        IconMode::External => resolver.path_relative(kind).to_string_lossy().into_owned(),
        IconMode::Embedded => resolver.data_uri(kind)?,
    };
    Ok(format!(
        "<<TABLE BORDER=\"0\"><TR><TD><IMG SRC=\"{}\" /></TD></TR><TR><TD>{}</TD></TR></TABLE>>",
        icon,
        escape_label_text(name)
    ))
}

/// Label for the namespace cluster boundary, drawn with the fixed `ns` icon.
pub fn namespace_label(
    resolver: &mut IconResolver,
    namespace: &str,
    mode: IconMode,
) -> Result<String, IconError> {
    resource_label(resolver, ResourceKind::Ns, namespace, mode)
}
