use crate::common::file::write_files;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const SETUP_SOURCE: &str = "int main() {
  return 0;
}
";

pub const MAIN_SOURCE: &str = "/*** includes ***/
#include <unistd.h>

/*** init ***/
int main() {
  char c;
  while (read(STDIN_FILENO, &c, 1) == 1);
  return 0;
}
";

pub const RAW_MODE_SOURCE: &str = "/*** includes ***/
#include <termios.h>
#include <unistd.h>

/*** terminal ***/
void enableRawMode() {
  struct termios raw;
  tcgetattr(STDIN_FILENO, &raw);
}

/*** init ***/
int main() {
  char c;
  while (read(STDIN_FILENO, &c, 1) == 1);
  return 0;
}
";

#[fixture]
pub fn tutorial_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");

    write_files(
        dir.path(),
        &[
            (
                "stepwise.toml",
                "title = \"Build Your Own Text Editor\"\n\
                 book_dir = \"book\"\n\
                 steps_dir = \"steps\"\n\
                 highlight = false\n",
            ),
            (
                "html_in/template.html",
                "<html><head><title>{{title}}</title></head><body>{{content}}</body></html>\n",
            ),
            ("html_in/style.css", "body { margin: 0; }\n"),
            ("html_in/favicon.ico", "icon"),
            ("steps/1-setup/kilo.c", SETUP_SOURCE),
            ("steps/1-setup/Makefile", "kilo: kilo.c\n"),
            ("steps/2-main/kilo.c", MAIN_SOURCE),
            ("steps/2-main/Makefile", "kilo: kilo.c\n"),
            ("steps/3-raw-mode/kilo.c", RAW_MODE_SOURCE),
            ("steps/3-raw-mode/Makefile", "kilo: kilo.c\n"),
            ("book/01.setup.md", "# Setup\n\nFirst steps.\n\n{{setup}}\n"),
            (
                "book/02.rawMode.md",
                "# Entering raw mode\n\n{{2}}\n\nThen:\n\n{{raw-mode}}\n\n{{listing:3}}\n",
            ),
        ],
    );

    dir
}

pub fn run_stepwise_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("stepwise").expect("Failed to find stepwise binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
