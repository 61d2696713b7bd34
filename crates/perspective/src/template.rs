//! Static TikZ document with one placeholder per role.

use std::fmt;

use crate::points::PointName;

/// Standalone TikZ source. The `$x$`, `$y$`, `$z$`, `$w$` node labels are
/// placeholders; the `\coordinate` lines match `CoordTable::standard()`.
pub const TEMPLATE: &str = r"\documentclass[border=5pt, convert={density=120,outext=.png}]{standalone}
\usepackage[dvipsnames]{xcolor}
\usepackage{tikz}
\begin{document}
\begin{tikzpicture}
    \coordinate (a) at (2, 1);
    \coordinate (b) at (3, 2);
    \draw[fill, OliveGreen] (a) circle (2pt) node[anchor=east] {$x$} -- (b) circle (2pt) node[anchor=west] {$y$};

    \coordinate (c) at (2.1, 2.1);
    \coordinate (d) at (3.9, 1.1);
    \draw[fill, OliveGreen] (c) circle (2pt) node[anchor=east] {$z$} -- (d) circle (2pt) node[anchor=west] {$w$};
\end{tikzpicture}
\end{document}";

/// Structural role of a point in a configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    X,
    Y,
    Z,
    W,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::X, Role::Y, Role::Z, Role::W];

    #[inline]
    pub fn placeholder(self) -> &'static str {
        match self {
            Role::X => "$x$",
            Role::Y => "$y$",
            Role::Z => "$z$",
            Role::W => "$w$",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // placeholder without the math delimiters
        f.write_str(&self.placeholder()[1..2])
    }
}

/// Substitute the labels bound to `(x, y, z, w)` into `TEMPLATE`.
///
/// Labels are drawn from `a..d`, so a substituted label never matches a later
/// placeholder.
pub fn render(labels: [PointName; 4]) -> String {
    Role::ALL
        .iter()
        .zip(labels)
        .fold(TEMPLATE.to_string(), |doc, (role, name)| {
            doc.replace(role.placeholder(), &name.math_label())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::CoordTable;

    #[test]
    fn identity_labels_fill_every_slot() {
        let doc = render(PointName::ALL);
        assert!(doc.contains("node[anchor=east] {$a$} -- (b)"));
        assert!(doc.contains("node[anchor=west] {$b$};"));
        assert!(doc.contains("node[anchor=east] {$c$} -- (d)"));
        assert!(doc.contains("node[anchor=west] {$d$};"));
        for role in Role::ALL {
            assert!(!doc.contains(role.placeholder()), "{role} left unfilled");
        }
    }

    #[test]
    fn swapped_labels_follow_roles() {
        let doc = render([PointName::C, PointName::D, PointName::A, PointName::B]);
        assert!(doc.contains("node[anchor=east] {$c$} -- (b)"));
        assert!(doc.contains("node[anchor=west] {$d$};\n\n"));
        assert!(doc.contains("node[anchor=east] {$a$} -- (d)"));
        assert!(doc.ends_with("node[anchor=west] {$b$};\n\\end{tikzpicture}\n\\end{document}"));
    }

    #[test]
    fn only_placeholders_change() {
        let doc = render(PointName::ALL);
        assert_eq!(doc.len(), TEMPLATE.len());
        assert!(doc.starts_with("\\documentclass[border=5pt"));
        assert!(!doc.ends_with('\n'));
    }

    #[test]
    fn template_coordinates_match_standard_table() {
        for (name, p) in CoordTable::standard().iter() {
            let line = format!("\\coordinate ({name}) at ({}, {});", p.x, p.y);
            assert!(TEMPLATE.contains(&line), "missing `{line}`");
        }
    }
}
