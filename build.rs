fn main() {
    git_revision::set();
}

mod git_revision {
    use std::env;
    use std::process::Command;

    const GIT_REVISION: &str = "GIT_REVISION";

    pub fn set() {
        println!("cargo:rerun-if-env-changed={GIT_REVISION}");

        if env::var(GIT_REVISION).is_ok() {
            println!("Environment variable {GIT_REVISION} is set. Not setting.");
            return;
        }

        let revision = git(&["status", "--porcelain"])
            .map(|status| {
                if status.is_empty() {
                    git(&["rev-parse", "HEAD"]).unwrap_or_default()
                } else {
                    "dirty".to_string()
                }
            })
            .filter(|rev| !rev.is_empty())
            .unwrap_or_else(|| "unknown".to_string());

        println!("cargo:rustc-env={GIT_REVISION}={revision}");
    }

    fn git(args: &[&str]) -> Option<String> {
        let output = Command::new("git").args(args).output().ok()?;

        if !output.status.success() {
            return None;
        }

        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
