use std::fmt;

// ---------------------------------------------------------------------------
// SlashCommandId
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlashCommandId {
    Proposal,
    Apply,
    Archive,
}

impl SlashCommandId {
    pub fn all() -> &'static [SlashCommandId] {
        &[
            SlashCommandId::Proposal,
            SlashCommandId::Apply,
            SlashCommandId::Archive,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SlashCommandId::Proposal => "proposal",
            SlashCommandId::Apply => "apply",
            SlashCommandId::Archive => "archive",
        }
    }
}

impl fmt::Display for SlashCommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SlashCommandId {
    type Err = crate::error::OpenSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "proposal" => Ok(SlashCommandId::Proposal),
            "apply" => Ok(SlashCommandId::Apply),
            "archive" => Ok(SlashCommandId::Archive),
            other => Err(crate::error::OpenSpecError::UnknownCommand(
                other.to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Descriptions
// ---------------------------------------------------------------------------

/// One-line description shown by the assistant's command picker.
pub fn description(id: SlashCommandId) -> &'static str {
    match id {
        SlashCommandId::Proposal => "Scaffold a new OpenSpec change and validate strictly",
        SlashCommandId::Apply => "Implement an approved OpenSpec change and keep tasks in sync",
        SlashCommandId::Archive => "Archive a deployed OpenSpec change and update specs",
    }
}

// ---------------------------------------------------------------------------
// Bodies
// ---------------------------------------------------------------------------

/// Shared markdown body for a slash command, identical across tools.
pub fn slash_command_body(id: SlashCommandId) -> &'static str {
    match id {
        SlashCommandId::Proposal => PROPOSAL_BODY,
        SlashCommandId::Apply => APPLY_BODY,
        SlashCommandId::Archive => ARCHIVE_BODY,
    }
}

const PROPOSAL_BODY: &str = concat!(
    "**Guardrails**\n",
    "- Favor straightforward, minimal implementations first and add complexity only when it is requested or clearly required.\n",
    "- Keep changes tightly scoped to the requested outcome.\n",
    "- Refer to `openspec/AGENTS.md` (located inside the `openspec/` directory) if you need additional OpenSpec conventions or clarifications.\n",
    "- Identify any vague or ambiguous details and ask the necessary follow-up questions before editing files.\n",
    "\n",
    "**Steps**\n",
    "1. Review `openspec/project.md`, run `openspec list` and `openspec list --specs`, and inspect related code or docs to ground the proposal in current behaviour.\n",
    "2. Choose a unique verb-led `change-id` and scaffold `proposal.md`, `tasks.md`, and `design.md` (when needed) under `openspec/changes/<id>/`.\n",
    "3. Map the change into concrete capabilities or requirements, breaking multi-scope efforts into distinct spec deltas with clear relationships and sequencing.\n",
    "4. Draft spec deltas in `changes/<id>/specs/<capability>/spec.md` using `## ADDED|MODIFIED|REMOVED Requirements` with at least one `#### Scenario:` per requirement.\n",
    "5. Draft `tasks.md` as an ordered list of small, verifiable work items that deliver user-visible progress, include validation, and highlight dependencies.\n",
    "6. Validate with `openspec validate <id> --strict` and resolve every issue before sharing the proposal.\n",
    "\n",
    "**Reference**\n",
    "- Use `openspec show <id> --json --deltas-only` or `openspec show <spec> --type spec` to inspect details when validation fails.\n",
    "- Search existing requirements with `rg -n \"Requirement:|Scenario:\" openspec/specs` before writing new ones.",
);

const APPLY_BODY: &str = concat!(
    "**Guardrails**\n",
    "- Favor straightforward, minimal implementations first and add complexity only when it is requested or clearly required.\n",
    "- Keep changes tightly scoped to the requested outcome.\n",
    "- Refer to `openspec/AGENTS.md` (located inside the `openspec/` directory) if you need additional OpenSpec conventions or clarifications.\n",
    "\n",
    "**Steps**\n",
    "Track these steps as TODOs and complete them one by one.\n",
    "1. Read `changes/<id>/proposal.md`, `design.md` (if present), and `tasks.md` to confirm scope and acceptance criteria.\n",
    "2. Work through tasks sequentially, keeping edits minimal and focused on the requested change.\n",
    "3. Confirm completion before updating statuses: make sure every item in `tasks.md` is finished.\n",
    "4. Update the checklist after all work is done so each task is marked `- [x]` and reflects reality.\n",
    "5. Reference `openspec list` or `openspec show <item>` when additional context is required.\n",
    "\n",
    "**Reference**\n",
    "- Use `openspec show <id> --json --deltas-only` if you need additional context from the proposal while implementing.",
);

const ARCHIVE_BODY: &str = concat!(
    "**Guardrails**\n",
    "- Favor straightforward, minimal implementations first and add complexity only when it is requested or clearly required.\n",
    "- Keep changes tightly scoped to the requested outcome.\n",
    "- Refer to `openspec/AGENTS.md` (located inside the `openspec/` directory) if you need additional OpenSpec conventions or clarifications.\n",
    "\n",
    "**Steps**\n",
    "1. Identify the requested change ID (via the prompt or `openspec list`).\n",
    "2. Run `openspec archive <id> --yes` to let the CLI move the change and apply spec updates without prompts (use `--skip-specs` only for tooling-only work).\n",
    "3. Review the command output to confirm the target specs were updated and the change landed in `changes/archive/`.\n",
    "4. Validate with `openspec validate --strict` and inspect with `openspec show <id>` if anything looks off.\n",
    "\n",
    "**Reference**\n",
    "- Inspect refreshed specs with `openspec list --specs` and address any validation issues before handing off.",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_roundtrip_through_str() {
        for &id in SlashCommandId::all() {
            let parsed: SlashCommandId = id.as_str().parse().unwrap();
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert!("deploy".parse::<SlashCommandId>().is_err());
    }

    #[test]
    fn proposal_description_is_fixed() {
        assert_eq!(
            description(SlashCommandId::Proposal),
            "Scaffold a new OpenSpec change and validate strictly"
        );
    }

    #[test]
    fn bodies_open_with_guardrails() {
        for &id in SlashCommandId::all() {
            assert!(
                slash_command_body(id).starts_with("**Guardrails**\n"),
                "{id} body is missing the guardrails section"
            );
        }
    }

    #[test]
    fn bodies_never_contain_toml_delimiter() {
        for &id in SlashCommandId::all() {
            assert!(!slash_command_body(id).contains("\"\"\""));
        }
    }
}
