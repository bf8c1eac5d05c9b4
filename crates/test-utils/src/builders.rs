#![allow(dead_code)]

use fidbatch::manifest::{Backbone, Job};

/// Builder for `Job` to simplify test setup.
pub struct JobBuilder {
    job: Job,
}

impl JobBuilder {
    pub fn new(real_dir: &str, gen_dir: &str) -> Self {
        Self {
            job: Job {
                name: format!("{real_dir} -> {gen_dir}"),
                real_dir: real_dir.to_string(),
                gen_dir: gen_dir.to_string(),
                backbones: vec![Backbone::Cem500k],
                cem_weights: None,
                script_args: Vec::new(),
                extra_args: Vec::new(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.job.name = name.to_string();
        self
    }

    pub fn backbones(mut self, backbones: Vec<Backbone>) -> Self {
        self.job.backbones = backbones;
        self
    }

    pub fn cem_weights(mut self, weights: &str) -> Self {
        self.job.cem_weights = Some(weights.to_string());
        self
    }

    pub fn script_args(mut self, args: &[&str]) -> Self {
        self.job.script_args = args.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn extra_args(mut self, args: &[&str]) -> Self {
        self.job.extra_args = args.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> Job {
        self.job
    }
}
