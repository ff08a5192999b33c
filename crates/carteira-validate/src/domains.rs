//! Fixed value domains accepted by the strict validators.

/// Brazilian federative unit codes.
pub const UFS: [&str; 27] = [
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB", "PR",
    "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

/// Company-size labels of the client sheet.
pub const PORTES_EMPRESA: [&str; 6] = ["MEI", "Micro", "Pequena", "Média", "Grande", "Multinacional"];

/// Contract-type labels of the client sheet.
///
/// Not the same vocabulary as [`ContractTypeTag`](carteira_model::ContractTypeTag),
/// which the contract importer uses.
pub const VALID_TIPOS_CONTRATO: [&str; 6] = [
    "Recorrente",
    "Projeto",
    "Consultoria",
    "Êxito",
    "Por Hora",
    "Misto",
];

/// Separator of multi-valued cells (`area`, `servico_prestado`,
/// `produtos_vendidos`).
pub const LIST_SEPARATOR: char = '|';
