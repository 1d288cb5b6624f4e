//! The built-in smoke workflow
//!
//! Exercises a basic Deis workflow end to end: register a user, push an
//! example app, and look for "Powered by Deis" in the HTTP response. Used
//! when no scenario file is supplied.

use super::config::{Scenario, TestStep};

/// The default end-to-end scenario
pub fn default_scenario() -> Scenario {
    Scenario {
        name: "deis-workflow".to_string(),
        description: Some(
            "Registers a user, pushes an example app, and checks the deployed HTTP response"
                .to_string(),
        ),
        steps: default_steps(),
    }
}

fn default_steps() -> Vec<TestStep> {
    vec![
        // Generate an SSH key named "deis" if needed, and activate it.
        TestStep::new(
            "",
            r#"
if [ ! -f {{.AuthKey}} ]; then
  ssh-keygen -q -t rsa -f {{.AuthKey}} -N '' -C deis
fi
ssh-add {{.AuthKey}}
"#,
        ),
        // Register a "test" user with the CLI, or skip if already registered.
        TestStep::new(
            "",
            r#"
deis register http://deis.{{.Domain}} \
  --username=test \
  --password=asdf1234 \
  --email=test@example.com || true
"#,
        ),
        // Log in as the "test" user.
        TestStep::new(
            "",
            r#"
deis login http://deis.{{.Domain}} \
  --username=test \
  --password=asdf1234
"#,
        ),
        // Add the "deis" SSH key, or skip if it's been added already.
        TestStep::new("", "deis keys:add {{.AuthKey}}.pub || true"),
        // Clone the example app repository locally.
        TestStep::new(
            "",
            r#"
if [ ! -d ./{{.ExampleApp}} ]; then
  git clone https://github.com/deis/{{.ExampleApp}}.git
fi
"#,
        ),
        // Remove a stale "deis" git remote if one exists.
        TestStep::new("{{.ExampleApp}}", "git remote remove deis || true"),
        // Create an app named "testing".
        // TODO: replace the fixed sleep with a bounded poll of the controller.
        TestStep::new("{{.ExampleApp}}", "sleep 6 && deis apps:create testing"),
        // git push the app to Deis.
        TestStep::new("{{.ExampleApp}}", "git push deis master"),
        // The app's URL must respond with "Powered by Deis".
        TestStep::new(
            "{{.ExampleApp}}",
            r#"
sleep 6 && curl -s http://testing.{{.Domain}} | grep -q 'Powered by Deis' || \
	(curl -v http://testing.{{.Domain}} ; exit 1)
"#,
        ),
        // Scale the app's web containers up to 3.
        TestStep::new("{{.ExampleApp}}", "deis scale web=3 || deis scale cmd=3"),
        // The scaled app must still respond with "Powered by Deis".
        TestStep::new(
            "{{.ExampleApp}}",
            r#"
sleep 7 && curl -s http://testing.{{.Domain}} | grep -q 'Powered by Deis' || \
	(curl -v http://testing.{{.Domain}} ; exit 1)
"#,
        ),
    ]
}
