//! Staged arithmetic network generator.

use crate::ast::expr::Expr;
use crate::ast::file::{CFile, Pragma};
use crate::ast::function::Function;
use crate::ast::item::FunctionItem;
use crate::ast::stmt::{AssertStmt, AssignStmt, DeclStmt, Stmt};
use crate::ast::ty::Ty;
use crate::context::{Context, IdentityPolicy, VarId};
use crate::generator::GeneratorError;
use crate::params::NetworkParams;
use std::collections::BTreeSet;
use tracing::debug;

/// One stage of the network. Slot `i` holds `values[i]` under identity `ids[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub index: usize,
    pub ids: Vec<VarId>,
    pub values: Vec<i64>,
}

impl Layer {
    pub fn var_name(&self, slot: usize) -> String {
        self.ids[slot].name(self.index)
    }

    fn generate_ids(ctx: &mut Context, num_slots: usize, policy: IdentityPolicy) -> Vec<VarId> {
        (0..num_slots)
            .map(|slot| ctx.create_var_id(slot, policy))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct Network {
    pub layers: Vec<Layer>,
    /// Body of `main`, without the final return.
    pub stmts: Vec<Stmt>,
}

impl Network {
    pub fn generate(ctx: &mut Context, params: &NetworkParams) -> Result<Network, GeneratorError> {
        let policy = IdentityPolicy::from_fresh(params.fresh_vars);
        let mut stmts: Vec<Stmt> = vec![];

        let values: Vec<i64> = (0..params.vars_per_layer)
            .map(|_| ctx.choose_initial_value())
            .collect();
        let ids = Layer::generate_ids(ctx, params.vars_per_layer, policy);
        let initial = Layer {
            index: 0,
            ids,
            values,
        };
        for (slot, value) in initial.values.iter().enumerate() {
            stmts.push(
                DeclStmt {
                    name: initial.var_name(slot),
                    ty: Ty::Int,
                    init: Some(Expr::int(*value)),
                }
                .into(),
            );
        }
        debug!(layer = 0, vars = params.vars_per_layer, "generated layer");

        let mut layers = vec![initial];
        for index in 1..params.num_layers {
            let prev = &layers[index - 1];
            let ids = Layer::generate_ids(ctx, params.vars_per_layer, policy);
            let mut layer = Layer {
                index,
                ids,
                values: Vec::with_capacity(params.vars_per_layer),
            };
            for slot in 0..params.vars_per_layer {
                let name = layer.var_name(slot);
                let mut value: i64 = 0;
                let mut operands = Vec::with_capacity(params.num_dependencies);
                for _ in 0..params.num_dependencies {
                    let dep = ctx.choose_dependency(params.vars_per_layer);
                    value = value.checked_add(prev.values[dep]).ok_or_else(|| {
                        GeneratorError::ValueOverflow {
                            layer: index,
                            name: name.clone(),
                        }
                    })?;
                    operands.push(Expr::ident(prev.var_name(dep)));
                }
                let rhs = Expr::sum(operands);
                // Reused identities are declared once per name family, in layers 0 and 1.
                if index == 1 || params.fresh_vars {
                    stmts.push(
                        DeclStmt {
                            name: name.clone(),
                            ty: Ty::Int,
                            init: Some(rhs),
                        }
                        .into(),
                    );
                } else {
                    stmts.push(
                        AssignStmt {
                            name: name.clone(),
                            rhs,
                        }
                        .into(),
                    );
                }
                stmts.push(
                    AssertStmt {
                        index: ctx.create_assert_index(),
                        expr: Expr::equals(Expr::ident(name), Expr::int(value)),
                    }
                    .into(),
                );
                layer.values.push(value);
            }
            debug!(layer = index, vars = params.vars_per_layer, "generated layer");
            layers.push(layer);
        }

        ctx.statistics.layers = layers.len();
        ctx.statistics.network_vars = layers.iter().map(|layer| layer.ids.len()).sum();
        ctx.statistics.distinct_identities = layers
            .iter()
            .flat_map(|layer| layer.ids.iter())
            .collect::<BTreeSet<_>>()
            .len();
        Ok(Network { layers, stmts })
    }

    pub fn into_file(self, params: &NetworkParams) -> CFile {
        CFile {
            pragma: if params.use_ssa {
                Pragma::SsaConstProp
            } else {
                Pragma::ConstProp
            },
            items: vec![FunctionItem {
                function: Function::main_fn(self.stmts),
            }
            .into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(
        num_layers: usize,
        num_dependencies: usize,
        vars_per_layer: usize,
        fresh_vars: bool,
    ) -> NetworkParams {
        NetworkParams {
            num_layers,
            num_dependencies,
            vars_per_layer,
            fresh_vars,
            use_ssa: false,
        }
    }

    #[test]
    fn values_are_sums_of_previous_layer() {
        let mut ctx = Context::new(Some(7));
        let network = Network::generate(&mut ctx, &params(4, 3, 5, false)).unwrap();
        assert_eq!(network.layers.len(), 4);
        for layer in &network.layers[1..] {
            let prev_max: i64 = *network.layers[layer.index - 1].values.iter().max().unwrap();
            assert!(layer.values.iter().all(|v| *v <= 3 * prev_max));
        }
        assert!(network.layers[0].values.iter().all(|v| (0..100).contains(v)));
    }

    #[test]
    fn reused_ids_repeat_every_layer() {
        let mut ctx = Context::new(Some(1));
        let network = Network::generate(&mut ctx, &params(5, 2, 3, false)).unwrap();
        for layer in &network.layers {
            assert_eq!(layer.ids, vec![VarId(0), VarId(1), VarId(2)]);
        }
        assert_eq!(ctx.statistics.distinct_identities, 3);
        assert_eq!(ctx.statistics.network_vars, 15);
    }

    #[test]
    fn fresh_ids_are_never_reused() {
        let mut ctx = Context::new(Some(1));
        let network = Network::generate(&mut ctx, &params(5, 2, 3, true)).unwrap();
        let ids: Vec<usize> = network
            .layers
            .iter()
            .flat_map(|layer| layer.ids.iter().map(|id| id.0))
            .collect();
        assert_eq!(ids, (1..=15).collect::<Vec<usize>>());
        assert_eq!(ctx.statistics.distinct_identities, 15);
    }

    #[test]
    fn later_reused_layers_assign_instead_of_declare() {
        let mut ctx = Context::new(Some(3));
        let network = Network::generate(&mut ctx, &params(3, 1, 2, false)).unwrap();
        let kinds: Vec<&str> = network
            .stmts
            .iter()
            .map(|stmt| match stmt {
                Stmt::Decl(_) => "decl",
                Stmt::Assign(_) => "assign",
                Stmt::Assert(_) => "assert",
                _ => "other",
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                "decl", "decl", "decl", "assert", "decl", "assert", "assign", "assert", "assign",
                "assert"
            ]
        );
    }

    #[test]
    fn zero_layers_still_emits_initial_layer() {
        let mut ctx = Context::new(Some(3));
        let network = Network::generate(&mut ctx, &params(0, 1, 4, false)).unwrap();
        assert_eq!(network.layers.len(), 1);
        assert_eq!(network.stmts.len(), 4);
        assert_eq!(ctx.statistics.assertions, 0);
    }

    #[test]
    fn overflow_is_reported() {
        let mut ctx = Context::new(Some(3));
        let res = Network::generate(&mut ctx, &params(64, 100, 3, false));
        assert!(matches!(res, Err(GeneratorError::ValueOverflow { .. })));
    }
}
