//! Data model for parsed Doxygen documentation — format-agnostic.

/// One parsed class-description file.
#[derive(Debug, Default)]
pub struct Document {
    /// Base name of the class's declared source file (e.g. `tubex_Tube.h`),
    /// taken from the first `<location>` element in the document. Empty
    /// when Doxygen recorded no location.
    pub source_file: String,
    pub members: Vec<Member>,
}

/// A single documented member: one `<memberdef>` carrying a `<definition>`.
#[derive(Debug, Default)]
pub struct Member {
    /// Raw `<definition>` text, e.g. `void tubex::Tube::foo`.
    pub definition: String,
    /// Raw `<argsstring>` text, e.g. `(int x)`. Empty when absent.
    pub argsstring: String,
    /// Raw `<name>` text. Destructors start with `~`.
    pub name: String,
    /// Text of the member's `<type>` node, un-normalized — identifier input.
    pub return_type: String,
    /// Declared parameters, in declaration order.
    pub params: Vec<Param>,
    /// Normalized brief description.
    pub brief: String,
    /// Normalized `<simplesect kind="note">` texts, document order.
    pub notes: Vec<String>,
    /// Detailed parameter descriptions, matched against `Param::declname`
    /// at render time.
    pub param_docs: Vec<ParamDoc>,
    /// Normalized return-value description, if documented.
    pub returns: Option<String>,
}

/// One declared parameter of a member.
#[derive(Debug, Default)]
pub struct Param {
    pub declname: String,
    /// Normalized type text.
    pub ty: String,
}

/// One `<parameteritem>` entry from the detailed description.
#[derive(Debug, Default)]
pub struct ParamDoc {
    pub name: String,
    pub description: String,
}
