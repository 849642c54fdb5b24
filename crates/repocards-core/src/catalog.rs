// The author-maintained project catalog.
// Provide the GitHub repo (owner/name) and optionally an npm package name.
// Additional display overrides are optional.

use crate::models::ProjectDescriptor;

pub const SITE_TITLE: &str = "svvy";
pub const SITE_DESCRIPTION: &str = "Building practical products and tools on emerging tech.";
pub const SITE_DOMAIN: &str = "svvy.sh";

/// Tools section of the site
pub fn tools() -> Vec<ProjectDescriptor> {
    vec![
        ProjectDescriptor::new(
            "helm",
            "svvysh/helm",
            "A CLI/TUI to scaffold, break down, run, and track project specs \
             with Codex worker/verifier loops.",
        ),
        ProjectDescriptor::new(
            "electron-agent-tools",
            "svvysh/electron-agent-tools",
            "MCP-free Playwright-powered CLI and TS helpers to launch, attach to, \
             and drive Electron apps over CDP; built for automation, CI, and LLM agents.",
        )
        .with_npm("electron-agent-tools"),
    ]
}

/// Products section of the site
pub fn products() -> Vec<ProjectDescriptor> {
    vec![ProjectDescriptor::new(
        "origin",
        "svvysh/origin",
        "A local app for writing and researching with AI, with a fine focus on \
         versioning and reviewing UX, that integrates well with your existing workflow.",
    )]
}

/// Every catalog entry, tools first
pub fn all() -> Vec<ProjectDescriptor> {
    let mut entries = tools();
    entries.extend(products());
    entries
}
