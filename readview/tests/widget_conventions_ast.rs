use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

#[test]
fn given_widget_views_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");

    let mut violations: Vec<String> = Vec::new();
    let mut checked = 0usize;

    for widget_dir in sorted_entries(&widgets_dir) {
        if !widget_dir.is_dir() {
            continue;
        }
        let view_dir = widget_dir.join("view");
        if !view_dir.is_dir() {
            violations.push(format!(
                "{}: widget is missing a view/ directory",
                widget_dir.display()
            ));
            continue;
        }

        let declared = declared_view_modules(&view_dir, &mut violations);
        let on_disk = view_files(&view_dir);
        if declared != on_disk {
            violations.push(format!(
                "{}: declared modules {:?} do not match file modules {:?}",
                view_dir.join("mod.rs").display(),
                declared,
                on_disk
            ));
        }

        for module in &declared {
            let file_path = view_dir.join(format!("{module}.rs"));
            validate_view_file(&file_path, &mut violations);
            checked += 1;
        }
    }

    assert!(checked > 0, "no view modules found under src/widgets");
    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

fn sorted_entries(dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });
    let mut paths: Vec<PathBuf> = entries
        .map(|entry| {
            entry
                .unwrap_or_else(|err| {
                    panic!("failed to read dir entry: {err}")
                })
                .path()
        })
        .collect();
    paths.sort();
    paths
}

fn declared_view_modules(
    view_dir: &Path,
    violations: &mut Vec<String>,
) -> BTreeSet<String> {
    let mod_rs = view_dir.join("mod.rs");
    let source = fs::read_to_string(&mod_rs).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", mod_rs.display())
    });
    let file = syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", mod_rs.display())
    });

    let mut declared = BTreeSet::new();
    for item in &file.items {
        match item {
            Item::Mod(item_mod)
                if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() =>
            {
                declared.insert(item_mod.ident.to_string());
            },
            Item::Mod(item_mod) => violations.push(format!(
                "{}: module declaration '{}' must be pub(crate) mod <name>;",
                mod_rs.display(),
                item_mod.ident
            )),
            _ => violations.push(format!(
                "{}: view/mod.rs may only declare modules",
                mod_rs.display()
            )),
        }
    }
    declared
}

fn view_files(view_dir: &Path) -> BTreeSet<String> {
    sorted_entries(view_dir)
        .into_iter()
        .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
        .filter_map(|path| {
            let stem = path.file_stem()?.to_string_lossy().to_string();
            (stem != "mod").then_some(stem)
        })
        .collect()
}

fn validate_view_file(file_path: &Path, violations: &mut Vec<String>) {
    let source = fs::read_to_string(file_path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", file_path.display())
    });
    let file = syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", file_path.display())
    });
    let expected_props = format!("{}Props", file_stem_pascal_case(file_path));

    for coupling in ["crate::app::", "crate::events::", "crate::state::"] {
        if source.contains(coupling) {
            violations.push(format!(
                "{}: widget views must not depend on {coupling}",
                file_path.display()
            ));
        }
    }

    for forbidden in [
        "log::",
        "std::fs::",
        "std::env::",
        "Task::",
        "iced::Task",
        "Subscription",
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
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        file_path.display()
                    ));
                }
            },
            Item::Fn(item_fn) if is_pub_crate(&item_fn.vis) => {
                violations.push(format!(
                    "{}: only view may be pub(crate), found '{}'",
                    file_path.display(),
                    item_fn.sig.ident
                ));
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    file_path.display()
                ));
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

    if props_names != [expected_props.clone()] {
        violations.push(format!(
            "{}: expected exactly one props type '{expected_props}', found {props_names:?}",
            file_path.display()
        ));
    }
}

fn file_stem_pascal_case(file_path: &Path) -> String {
    let stem = file_path
        .file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", file_path.display()))
        .to_string_lossy()
        .to_string();
    snake_to_pascal_case(&stem)
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
