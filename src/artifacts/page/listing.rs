use crate::areas::workspace::Workspace;
use crate::artifacts::highlight::Highlighter;
use crate::artifacts::highlight::plain::escape_html;
use crate::artifacts::step::step_name::StepDir;

/// Every file of a step, highlighted in full with no folding.
pub fn render_listing(
    workspace: &Workspace,
    step: &StepDir,
    highlighter: &dyn Highlighter,
) -> anyhow::Result<String> {
    let mut html = String::new();

    for file_path in workspace.list_files(step)? {
        let source = workspace.read_file(step, &file_path)?;
        let name = file_path.to_string_lossy();
        let language = highlighter.guess_language(&name);

        let code = source
            .lines()
            .map(|line| highlighter.highlight(line, &language))
            .collect::<Vec<_>>()
            .join("\n");

        html.push_str("<div class=\"listing\">\n");
        html.push_str(&format!(
            "<div class=\"filename\">{}</div>\n",
            escape_html(&name)
        ));
        html.push_str(&format!("<pre class=\"highlight\"><code>{code}\n</code></pre>\n"));
        html.push_str("</div>\n");
    }

    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::highlight::plain::PlainHtml;
    use assert_fs::TempDir;
    use assert_fs::prelude::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn each_file_is_listed_whole() {
        let dir = TempDir::new().unwrap();
        dir.child("1-setup/Makefile").write_str("kilo: kilo.c\n").unwrap();
        dir.child("1-setup/kilo.c")
            .write_str("int main() {\n  return a < b;\n}\n")
            .unwrap();
        let workspace = Workspace::new(dir.path().into());
        let steps = workspace.list_steps().unwrap();
        let (_, setup) = steps.find("setup").unwrap();

        let html = render_listing(&workspace, setup, &PlainHtml).unwrap();

        assert_eq!(
            html,
            "<div class=\"listing\">\n\
             <div class=\"filename\">Makefile</div>\n\
             <pre class=\"highlight\"><code>kilo: kilo.c\n</code></pre>\n\
             </div>\n\
             <div class=\"listing\">\n\
             <div class=\"filename\">kilo.c</div>\n\
             <pre class=\"highlight\"><code>int main() {\n  return a &lt; b;\n}\n</code></pre>\n\
             </div>\n"
        );
    }
}
