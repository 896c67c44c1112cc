/// Use cases module containing application business logic orchestration
mod convert_dependency_graph;

pub use convert_dependency_graph::ConvertDependencyGraphUseCase;
