const GITHUB_PREFIX: &str = "https://github.com/";
const SANDBOX_BASE: &str = "https://codesandbox.io/s/github/";

/// `owner/repo` from a GitHub URL, or `None` when the link is unusable.
pub fn repo_path(url: &str) -> Option<String> {
    let s = url.trim();
    let rest = s.strip_prefix(GITHUB_PREFIX).unwrap_or(s);
    let rest = rest.strip_suffix(".git").unwrap_or(rest).trim();
    if !rest.contains('/') {
        return None;
    }
    Some(rest.to_string())
}

/// Browser sandbox link for a kit's repository. Missing or malformed links
/// produce nothing.
pub fn sandbox_url(github: Option<&str>) -> Option<String> {
    let Some(link) = github else {
        log::info!("no repository link; sandbox unavailable");
        return None;
    };
    let path = repo_path(link)?;
    Some(format!("{}{}", SANDBOX_BASE, path))
}

#[cfg(test)]
mod tests {
    use super::{repo_path, sandbox_url};

    #[test]
    fn strips_host_and_git_suffix() {
        assert_eq!(
            repo_path("https://github.com/Vikrantthakur64/Django_Backend_Starter_Kit.git").as_deref(),
            Some("Vikrantthakur64/Django_Backend_Starter_Kit")
        );
        assert_eq!(
            repo_path("https://github.com/Vikrantthakur64/FASTAPI_AI_BACKEND").as_deref(),
            Some("Vikrantthakur64/FASTAPI_AI_BACKEND")
        );
    }

    #[test]
    fn keeps_dots_inside_repo_names() {
        assert_eq!(
            repo_path("https://github.com/acme/Node.js_Express_Starter_Kit.git").as_deref(),
            Some("acme/Node.js_Express_Starter_Kit")
        );
    }

    #[test]
    fn rejects_paths_without_owner() {
        assert_eq!(repo_path("https://github.com/just-a-repo.git"), None);
        assert_eq!(repo_path(""), None);
    }

    #[test]
    fn sandbox_link_is_noop_without_repo() {
        assert_eq!(sandbox_url(None), None);
        assert_eq!(sandbox_url(Some("https://github.com/solo")), None);
        assert_eq!(
            sandbox_url(Some("https://github.com/acme/kit")).as_deref(),
            Some("https://codesandbox.io/s/github/acme/kit")
        );
    }
}
