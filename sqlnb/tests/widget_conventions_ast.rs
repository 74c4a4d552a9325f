use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

#[test]
fn given_widgets_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");
    let mod_rs = widgets_dir.join("mod.rs");

    let mut violations: Vec<String> = Vec::new();

    let mod_file = parse(&mod_rs);

    let mut declared_modules = BTreeSet::new();
    for item in &mod_file.items {
        if let Item::Mod(item_mod) = item {
            if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() {
                declared_modules.insert(item_mod.ident.to_string());
            } else {
                violations.push(format!(
                    "{}: module declaration '{}' must be pub(crate) mod <name>;",
                    mod_rs.display(),
                    item_mod.ident
                ));
            }
        }
    }

    let mut fs_modules = BTreeSet::new();
    let mut widget_dirs = Vec::new();
    let entries = fs::read_dir(&widgets_dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", widgets_dir.display())
    });
    for entry in entries {
        let entry = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"));
        let path = entry.path();
        let Some(stem) = path.file_stem() else {
            continue;
        };
        let stem = stem.to_string_lossy().to_string();

        if path.is_dir() {
            fs_modules.insert(stem);
            widget_dirs.push(path);
        } else if path.extension().is_some_and(|ext| ext == "rs")
            && stem != "mod"
        {
            fs_modules.insert(stem);
        }
    }

    if declared_modules != fs_modules {
        violations.push(format!(
            "{}: declared modules {:?} do not match file modules {:?}",
            mod_rs.display(),
            declared_modules,
            fs_modules
        ));
    }

    widget_dirs.sort();
    for dir in &widget_dirs {
        let view_rs = dir.join("view.rs");
        if !view_rs.exists() {
            violations.push(format!("{}: missing view.rs", dir.display()));
            continue;
        }
        validate_view_file(dir, &view_rs, &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

fn validate_view_file(
    widget_dir: &Path,
    file_path: &Path,
    violations: &mut Vec<String>,
) {
    let source = fs::read_to_string(file_path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", file_path.display())
    });
    let file = parse(file_path);
    let expected_prefix = dir_pascal_case(widget_dir);

    for coupling in ["crate::app", "crate::session", "crate::providers"] {
        if source.contains(coupling) {
            violations.push(format!(
                "{}: direct coupling to {coupling} is forbidden in views",
                file_path.display()
            ));
        }
    }

    for forbidden in [
        "log::",
        "std::fs::",
        "std::process::Command",
        "Task::",
        "iced::Task",
    ] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }

    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();

    for item in &file.items {
        match item {
            Item::Fn(item_fn) => {
                if item_fn.sig.ident == "view" {
                    if is_pub_crate(&item_fn.vis) {
                        view_count += 1;
                    } else {
                        violations.push(format!(
                            "{}: view must be pub(crate)",
                            file_path.display()
                        ));
                    }
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            Item::Use(item_use) => {
                if use_tree_has_glob(&item_use.tree) {
                    violations.push(format!(
                        "{}: wildcard use/import is forbidden",
                        file_path.display()
                    ));
                }
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            file_path.display()
        ));
    }

    let expected_props = format!("{expected_prefix}Props");
    if props_names != [expected_props.clone()] {
        violations.push(format!(
            "{}: expected exactly one props type '{expected_props}', found {props_names:?}",
            file_path.display()
        ));
    }
}

fn parse(path: &Path) -> syn::File {
    let source = fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    });
    syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn dir_pascal_case(dir: &Path) -> String {
    let name = dir
        .file_name()
        .unwrap_or_else(|| panic!("missing name for {}", dir.display()))
        .to_string_lossy()
        .to_string();
    snake_to_pascal_case(&name)
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
