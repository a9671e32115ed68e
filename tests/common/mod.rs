//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;

use git2::{Oid, Repository, Signature};

use gitcommit::{Config, Prompter, PromptError};

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new git repository with a committer identity and one empty commit.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");

        let mut config = repo.config().expect("Failed to open repo config");
        config.set_str("user.name", "Test User").expect("Failed to set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Failed to set user.email");
        config
            .set_bool("commit.gpgsign", false)
            .expect("Failed to disable signing");

        let test_repo = Self { dir, repo };
        test_repo.commit_index("init");
        test_repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Commit whatever is in the index. Returns the commit OID.
    pub fn commit_index(&self, message: &str) -> Oid {
        let sig = self.signature();
        let mut index = self.repo.index().expect("Failed to get index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Write a file and add it to the index.
    pub fn stage_file(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).expect("Failed to write file");
        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(Path::new(name)).expect("Failed to add file");
        index.write().expect("Failed to write index");
    }

    /// Create a branch at HEAD and check it out.
    pub fn checkout_branch(&self, name: &str) {
        let head = self
            .repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("Failed to resolve HEAD");
        self.repo.branch(name, &head, false).expect("Failed to create branch");
        self.repo
            .set_head(&format!("refs/heads/{}", name))
            .expect("Failed to set HEAD");
    }

    /// Message of the commit HEAD points to.
    pub fn head_message(&self) -> String {
        self.repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .map(|c| c.message().unwrap_or_default().trim().to_string())
            .expect("Failed to read HEAD commit")
    }
}

/// Config pointing at `api_url` with a real-looking key and the `IOS-` task prefix.
pub fn test_config(api_url: &str) -> Config {
    Config {
        api_key: "sk-test".to_string(),
        api_url: api_url.to_string(),
        task_prefix: "IOS-".to_string(),
        ..Config::default()
    }
}

/// One scripted answer for [`ScriptedPrompter`].
#[derive(Debug, Clone)]
pub enum Answer {
    Select(usize),
    Input(String),
    Password(String),
    Confirm(bool),
}

/// Prompter that replays answers in order and records every question.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    pub asked: RefCell<Vec<String>>,
    pub menus: RefCell<Vec<Vec<String>>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
            ..Default::default()
        }
    }

    fn next(&self, prompt: &str) -> Answer {
        self.asked.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("Unexpected prompt: {}", prompt))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize, PromptError> {
        self.menus.borrow_mut().push(items.to_vec());
        match self.next(prompt) {
            Answer::Select(i) => Ok(i),
            other => panic!("Expected select answer for '{}', got {:?}", prompt, other),
        }
    }

    fn input(&self, prompt: &str, initial: &str) -> Result<String, PromptError> {
        match self.next(prompt) {
            Answer::Input(s) => Ok(s.replace("{initial}", initial)),
            other => panic!("Expected input answer for '{}', got {:?}", prompt, other),
        }
    }

    fn password(&self, prompt: &str) -> Result<String, PromptError> {
        match self.next(prompt) {
            Answer::Password(s) => Ok(s),
            other => panic!("Expected password answer for '{}', got {:?}", prompt, other),
        }
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool, PromptError> {
        match self.next(prompt) {
            Answer::Confirm(b) => Ok(b),
            other => panic!("Expected confirm answer for '{}', got {:?}", prompt, other),
        }
    }
}
