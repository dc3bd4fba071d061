//! Docstring block rendering — one generated constant per documented member.
//!
//! The emitted block is a C++ raw-string constant so the binding layer can
//! hand the text to pybind11 untouched. Sections (notes, Args, Returns) are
//! only emitted when the source XML documents them.

use crate::model::Member;
use crate::text::sentence;

const INDENT: &str = "  ";

/// Render the generated-header block for one member.
pub fn render_member(member: &Member, doc_id: &str) -> String {
    let mut out = String::new();

    // Original signature, as a comment above the constant
    out.push_str("// ");
    out.push_str(&member.definition);
    out.push_str(&member.argsstring);
    out.push('\n');

    // The brief description shares the opening line of the raw string
    out.push_str("const char* ");
    out.push_str(doc_id);
    out.push_str(" = R\"_docs(");
    out.push_str(&sentence(&member.brief));
    out.push('\n');

    if !member.notes.is_empty() {
        out.push('\n');
        for note in &member.notes {
            out.push_str(&sentence(note));
            out.push('\n');
        }
    }

    if !member.params.is_empty() {
        out.push_str("\nArgs:\n");
        for param in &member.params {
            out.push_str(INDENT);
            out.push_str(&param.declname);
            out.push_str(" (");
            out.push_str(&param.ty);
            out.push_str("): ");
            // Each matching detailed description terminates the line;
            // an undescribed parameter leaves it open.
            for doc in member
                .param_docs
                .iter()
                .filter(|d| d.name == param.declname)
            {
                out.push_str(&sentence(&doc.description));
                out.push('\n');
            }
        }
    }

    if let Some(ref returns) = member.returns {
        out.push_str("\nReturns:\n");
        out.push_str(INDENT);
        out.push_str(&sentence(returns));
        out.push('\n');
    }

    out.push_str(")_docs\";\n\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Param, ParamDoc};

    #[test]
    fn brief_and_undescribed_arg() {
        let member = Member {
            definition: "void tubex::Tube::foo".to_string(),
            argsstring: "(int x)".to_string(),
            name: "foo".to_string(),
            return_type: "void".to_string(),
            params: vec![Param {
                declname: "x".to_string(),
                ty: "int".to_string(),
            }],
            brief: "does a thing".to_string(),
            ..Member::default()
        };

        assert_eq!(
            render_member(&member, "TUBE_VOID_FOO_INT"),
            "// void tubex::Tube::foo(int x)\n\
             const char* TUBE_VOID_FOO_INT = R\"_docs(does a thing.\n\
             \nArgs:\n  x (int): )_docs\";\n\n"
        );
    }

    #[test]
    fn full_block_with_notes_args_and_return() {
        let member = Member {
            definition: "double tubex::Tube::volume".to_string(),
            argsstring: "(double t) const".to_string(),
            name: "volume".to_string(),
            return_type: "double".to_string(),
            params: vec![Param {
                declname: "t".to_string(),
                ty: "double".to_string(),
            }],
            brief: "Computes the tube volume".to_string(),
            notes: vec!["the tube must be bounded".to_string()],
            param_docs: vec![ParamDoc {
                name: "t".to_string(),
                description: "the evaluation time".to_string(),
            }],
            returns: Some("the volume value".to_string()),
        };

        assert_eq!(
            render_member(&member, "TUBE_DOUBLE_VOLUME_DOUBLE"),
            "// double tubex::Tube::volume(double t) const\n\
             const char* TUBE_DOUBLE_VOLUME_DOUBLE = R\"_docs(Computes the tube volume.\n\
             \nthe tube must be bounded.\n\
             \nArgs:\n  t (double): the evaluation time.\n\
             \nReturns:\n  the volume value.\n\
             )_docs\";\n\n"
        );
    }

    #[test]
    fn no_params_no_args_section() {
        let member = Member {
            definition: "tubex::Tube::~Tube".to_string(),
            argsstring: "()".to_string(),
            name: "~Tube".to_string(),
            brief: "Tube destructor".to_string(),
            ..Member::default()
        };

        let block = render_member(&member, "TUBE_DESTRUCT_TUBE");
        assert!(!block.contains("Args:"));
        assert!(!block.contains("Returns:"));
        assert!(block.contains("R\"_docs(Tube destructor.\n)_docs\";"));
    }
}
