//! Text generation for the README and the php-cs-fixer config

use super::stubs::{PHP_CS, STANDARDS_TOKEN};

/// Render the README skeleton with `title` as its heading
pub fn readme(title: &str) -> String {
    format!(
        "# {title}\n\
         \n\
         ...\n\
         \n\
         ## Installing\n\
         \n\
         ...\n\
         \n\
         ## Usage\n\
         \n\
         ...\n\
         \n\
         ## License\n\
         \n\
         MIT\n"
    )
}

/// Render a list of strings the way PHP's `var_export` prints an indexed array
///
/// ```text
/// array (
///   0 => 'symfony',
/// )
/// ```
pub fn export_list<S: AsRef<str>>(items: &[S]) -> String {
    let mut out = String::from("array (\n");
    for (idx, item) in items.iter().enumerate() {
        out.push_str(&format!("  {} => '{}',\n", idx, escape_single_quoted(item.as_ref())));
    }
    out.push(')');
    out
}

fn escape_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Substitute the standards token in the php-cs-fixer stub
pub fn php_cs(standard: &str) -> String {
    substitute_standards(PHP_CS, standard)
}

fn substitute_standards(template: &str, standard: &str) -> String {
    template.replace(STANDARDS_TOKEN, &export_list(&[standard]))
}
