use serde::{Deserialize, Serialize};

/// Client row accepted by the strict import validator.
///
/// This is the contract between validation and persistence. The pipe
/// delimited list columns are already decoded, and `relacionamento_exterior`
/// is a real boolean.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClienteCsvTemplate {
    pub nome_cliente: String,
    pub contato_principal: Option<String>,
    pub grupo_economico: Option<String>,
    pub cpf_cnpj: Option<String>,
    pub segmento_economico: Option<String>,
    pub cidade: Option<String>,
    /// Upper-cased UF code.
    pub estado: Option<String>,
    pub pais: Option<String>,
    pub relacionamento_exterior: bool,
    pub porte_empresa: Option<String>,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
    pub area: Vec<String>,
    pub servico_prestado: Vec<String>,
    pub produtos_vendidos: Vec<String>,
    pub potencial: Option<String>,
    pub nota_potencial: Option<u8>,
    pub data_inicio: Option<String>,
    pub tipo_contrato: Option<String>,
    pub ocupacao_cliente: Option<String>,
}
