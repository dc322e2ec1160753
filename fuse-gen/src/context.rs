use crate::statistics::generation::GenerationStatistics;
use rand::prelude::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// State of a single generation run.
/// Every counter lives here, so two runs never share names or assertion numbers.
pub struct Context {
    pub name_handler: NameHandler,
    pub statistics: GenerationStatistics,
    pub rng: StdRng,
}

impl Context {
    pub fn new(seed: Option<u64>) -> Context {
        let rng = if let Some(seed) = seed {
            StdRng::seed_from_u64(seed)
        } else {
            StdRng::seed_from_u64(thread_rng().gen())
        };
        Context {
            name_handler: NameHandler::default(),
            statistics: GenerationStatistics::default(),
            rng,
        }
    }
}

impl Context {
    /// Initial value of a first layer variable, uniform in `[0, 100)`.
    pub fn choose_initial_value(&mut self) -> i64 {
        self.rng.gen_range(0..100)
    }

    /// Uniformly picks one of the `num_slots` slots of the previous layer.
    pub fn choose_dependency(&mut self, num_slots: usize) -> usize {
        self.rng.gen_range(0..num_slots)
    }

    pub fn create_cond_var(&mut self) -> CondVar {
        self.statistics.condition_vars += 1;
        self.name_handler.create_cond_var()
    }

    pub fn create_function_name(&mut self) -> String {
        self.statistics.functions += 1;
        self.name_handler.create_function_name()
    }

    pub fn create_assert_index(&mut self) -> usize {
        self.statistics.assertions += 1;
        self.name_handler.create_assert_index()
    }

    pub fn create_var_id(&mut self, slot: usize, policy: IdentityPolicy) -> VarId {
        match policy {
            IdentityPolicy::Reused => VarId(slot),
            IdentityPolicy::Fresh => self.name_handler.create_fresh_var_id(),
        }
    }
}

#[derive(Default, Clone)]
pub struct NameHandler {
    cond_var_counter: usize,
    function_counter: usize,
    assert_counter: usize,
    fresh_var_counter: usize,
}

impl NameHandler {
    fn create_cond_var(&mut self) -> CondVar {
        let ordinal = self.cond_var_counter;
        self.cond_var_counter += 1;
        CondVar { ordinal }
    }

    fn create_function_name(&mut self) -> String {
        let name = format!("func{}", self.function_counter);
        self.function_counter += 1;
        name
    }

    fn create_assert_index(&mut self) -> usize {
        let index = self.assert_counter;
        self.assert_counter += 1;
        index
    }

    fn create_fresh_var_id(&mut self) -> VarId {
        self.fresh_var_counter += 1;
        VarId(self.fresh_var_counter)
    }
}

/// Branch condition variable `var<ordinal>`, whose known value is its own ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CondVar {
    pub ordinal: usize,
}

impl CondVar {
    pub fn name(&self) -> String {
        format!("var{}", self.ordinal)
    }

    pub fn value(&self) -> i64 {
        self.ordinal as i64
    }
}

/// Identity of a network variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct VarId(pub usize);

impl VarId {
    /// Even layers use the `varEven` family and odd layers the `varOdd` family.
    pub fn name(&self, layer: usize) -> String {
        if layer % 2 == 0 {
            format!("varEven{}", self.0)
        } else {
            format!("varOdd{}", self.0)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentityPolicy {
    /// Slot `i` is identity `i` in every layer.
    Reused,
    /// Every slot of every layer draws a new identity from the run's counter.
    Fresh,
}

impl IdentityPolicy {
    pub fn from_fresh(fresh: bool) -> IdentityPolicy {
        if fresh {
            IdentityPolicy::Fresh
        } else {
            IdentityPolicy::Reused
        }
    }
}
