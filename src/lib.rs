// This is a metapackage for the cross-crate integration tests under tests/
