//! Doxygen XML parser — maps `<memberdef>` elements into the model.
//!
//! Only the tag shapes Doxygen emits for class descriptions are handled.
//! Missing inner elements degrade to empty strings rather than failing;
//! a malformed document is the one fatal condition.

use crate::model::{Document, Member, Param, ParamDoc};
use crate::text::normalize;
use anyhow::{Context, Result};
use roxmltree::Node;

/// Parse one class-description file.
pub fn parse(xml: &str) -> Result<Document> {
    let doc = roxmltree::Document::parse(xml).context("malformed Doxygen XML")?;
    let root = doc.root_element();

    // Last path segment of the first recorded location.
    let source_file = descendant(root, "location")
        .and_then(|n| n.attribute("file"))
        .map(|f| f.rsplit('/').next().unwrap_or(f).to_string())
        .unwrap_or_default();

    let members = root
        .descendants()
        .filter(|n| n.has_tag_name("memberdef"))
        .filter_map(|m| child_text(m, "definition").map(|d| parse_member(m, d)))
        .collect();

    Ok(Document {
        source_file,
        members,
    })
}

fn parse_member(memberdef: Node, definition: &str) -> Member {
    let params = memberdef
        .children()
        .filter(|n| n.has_tag_name("param"))
        .map(|p| Param {
            declname: child_text(p, "declname").unwrap_or_default().to_string(),
            ty: child(p, "type").map(tags_text).unwrap_or_default(),
        })
        .collect();

    let notes = memberdef
        .descendants()
        .filter(|n| simplesect_kind(n, "note"))
        .map(tags_text)
        .collect();

    let returns = memberdef
        .descendants()
        .find(|n| simplesect_kind(n, "return"))
        .and_then(|s| child(s, "para"))
        .map(tags_text);

    Member {
        definition: definition.to_string(),
        argsstring: child_text(memberdef, "argsstring")
            .unwrap_or_default()
            .to_string(),
        name: child_text(memberdef, "name").unwrap_or_default().to_string(),
        return_type: descendant(memberdef, "type")
            .map(raw_text)
            .unwrap_or_default(),
        params,
        brief: child(memberdef, "briefdescription")
            .map(tags_text)
            .unwrap_or_default(),
        notes,
        param_docs: parameter_list(memberdef),
        returns,
    }
}

/// Detailed parameter descriptions: the first `<parameterlist>` directly
/// under `detaileddescription/para`.
fn parameter_list(memberdef: Node) -> Vec<ParamDoc> {
    let Some(plist) = child(memberdef, "detaileddescription")
        .into_iter()
        .flat_map(|d| d.children().filter(|n| n.has_tag_name("para")))
        .find_map(|p| child(p, "parameterlist"))
    else {
        return Vec::new();
    };

    plist
        .descendants()
        .filter(|n| n.has_tag_name("parameteritem"))
        .map(|item| ParamDoc {
            name: child(item, "parameternamelist")
                .and_then(|nl| child_text(nl, "parametername"))
                .unwrap_or_default()
                .to_string(),
            description: child(item, "parameterdescription")
                .map(tags_text)
                .unwrap_or_default(),
        })
        .collect()
}

fn simplesect_kind(node: &Node, kind: &str) -> bool {
    node.has_tag_name("simplesect") && node.attribute("kind") == Some(kind)
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(name))
}

fn child_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    child(node, name).and_then(|n| n.text())
}

fn descendant<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.descendants().find(|n| n.has_tag_name(name))
}

/// All text fragments under `node` in document order, nested tags included.
fn raw_text(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Like [`raw_text`], but normalized for display.
fn tags_text(node: Node) -> String {
    normalize(&raw_text(node))
}
