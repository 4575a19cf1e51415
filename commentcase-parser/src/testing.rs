//! Shared Go sources for tests
//!
//! Kept in one place so unit tests, integration tests and the CLI tests all
//! exercise the same inputs.

/// A struct with a doc comment and a comment between two fields
pub const STRUCT_FIELDS: &str = "package config

// Config Holds The Settings
type Config struct {
\tHost string
\t// The port To Listen On
\tPort int
}
";

/// One of every container kind, plus comments outside all of them
pub const KITCHEN_SINK: &str = r#"// Package sample Shows Every Container.
package sample

import "fmt"

// Limits Are Tuned For Tests
const (
	// Max Retries Before Giving Up
	MaxRetries = 3
)

var (
	// Default Name Used By NewClient
	defaultName = "sample" // Trailing Comment Here
)

// Timeout Is Not Grouped
var Timeout = 30

// Client Talks To The Server
type Client struct {
	// Name Of The Client
	name string
	/* Retries So Far */
	retries int
}

// NewClient Builds A Client
func NewClient() *Client { // Builds With Defaults
	// TODO Validate The Name
	c := &Client{name: defaultName}
	//nolint:gosec // Using math/rand Is Fine Here
	fmt.Println("// Not A Comment")
	go func() {
		// Inside A Literal Too
	}()
	return c
}
"#;
