//! Workspace-level integration tests for PalSel live under `tests/`.
