//! Host capabilities handed to the translator at construction.
//!
//! The pipeline driving the translator owns module-name mangling and the
//! warning-suppression policy; both surface here as a small capability
//! object. The translator only requires that mangled names are legal leading
//! identifiers in the emitted dialect.

/// Capabilities the annotating host provides to the translator.
pub trait AnnotatorHost {
    /// Mangle a module path into a globally unique identifier.
    ///
    /// `context` is the path of the importing file, empty when the import
    /// path is already absolute. The transform must be deterministic and
    /// injective over the paths the pipeline presents.
    fn path_to_module_name(&self, context: &str, import_path: &str) -> String;

    /// When true, warnings produced while translating references in `path`
    /// are dropped instead of recorded.
    fn should_ignore_warnings_for(&self, path: &str) -> bool {
        let _ = path;
        false
    }
}

/// Host with the default mangling and no warning suppression.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultAnnotatorHost;

impl AnnotatorHost for DefaultAnnotatorHost {
    fn path_to_module_name(&self, _context: &str, import_path: &str) -> String {
        module_name_as_identifier(import_path)
    }
}

/// Default file-name mangling: strip a TypeScript-ish extension, replace
/// every character outside `[A-Za-z0-9_]` with `$`, and prefix `module$`.
///
/// The result always starts with an identifier character and never contains
/// a dot, so it is usable as the leftmost segment of a dotted name.
pub fn module_name_as_identifier(path: &str) -> String {
    let path = normalize_path(path);
    let stem = strip_ts_extension(&path);
    let mut out = String::with_capacity(stem.len() + 8);
    out.push_str("module$");
    for c in stem.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c);
        } else {
            out.push('$');
        }
    }
    out
}

fn strip_ts_extension(path: &str) -> &str {
    for ext in [".d.ts", ".tsx", ".ts", ".js"] {
        if let Some(stem) = path.strip_suffix(ext) {
            return stem;
        }
    }
    path
}

/// Normalize a path to OS-neutral form: forward slashes, no `.` segments,
/// `..` segments collapsed textually.
pub fn normalize_path(path: &str) -> String {
    let unified = path.replace('\\', "/");
    let absolute = unified.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();
    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            _ => segments.push(segment),
        }
    }
    let joined = segments.join("/");
    if absolute {
        format!("/{joined}")
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("a\\b\\c.ts"), "a/b/c.ts");
        assert_eq!(normalize_path("./a/./b.ts"), "a/b.ts");
        assert_eq!(normalize_path("a/x/../b.ts"), "a/b.ts");
        assert_eq!(normalize_path("/root/../b.ts"), "/b.ts");
        assert_eq!(normalize_path("../up.ts"), "../up.ts");
    }

    #[test]
    fn test_module_name_as_identifier() {
        assert_eq!(
            module_name_as_identifier("src/foo/bar.ts"),
            "module$src$foo$bar"
        );
        assert_eq!(
            module_name_as_identifier("types/api.d.ts"),
            "module$types$api"
        );
        assert_eq!(
            module_name_as_identifier("@scope/pkg.ts"),
            "module$$scope$pkg"
        );
    }

    #[test]
    fn test_mangling_is_deterministic() {
        let a = module_name_as_identifier("a/b-c.ts");
        assert_eq!(a, module_name_as_identifier("a/b-c.ts"));
        assert_ne!(a, module_name_as_identifier("a/b_c.ts"));
    }

    #[test]
    fn test_default_host() {
        let host = DefaultAnnotatorHost;
        assert_eq!(host.path_to_module_name("", "m.ts"), "module$m");
        assert!(!host.should_ignore_warnings_for("m.ts"));
    }
}
