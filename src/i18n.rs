//! 界面文本（en / pt / es）

use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Pt,
    Es,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Pt, Language::Es];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
            Language::Es => "es",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// 语言自身的名称，用于语言选择列表
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Pt => "Português",
            Language::Es => "Español",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|lang| *lang == self).unwrap_or(0)
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(&s.to_ascii_lowercase()).ok_or_else(|| Error::UnknownLanguage {
            code: s.to_string(),
        })
    }
}

/// 一种语言的全部界面文本
#[derive(Debug)]
pub struct Translations {
    pub title: &'static str,
    pub list_title: &'static str,
    pub add_new_item: &'static str,
    pub select_type: &'static str,
    pub pro: &'static str,
    pub con: &'static str,
    pub reset_list: &'static str,
    pub export: &'static str,
    pub print_save: &'static str,
    pub pros: &'static str,
    pub cons: &'static str,
    pub no_items_yet: &'static str,
    pub summary: &'static str,
    pub positive: &'static str,
    pub recommended: &'static str,
    pub not_recommended: &'static str,
    pub created_on: &'static str,
    pub light_mode: &'static str,
    pub dark_mode: &'static str,
    pub language: &'static str,
    pub confirm_reset: &'static str,
    pub exported_to: &'static str,
    pub export_failed: &'static str,
    pub item_added: &'static str,
    pub item_deleted: &'static str,
    pub help_normal: &'static str,
    pub help_title: &'static str,
    pub help_adding: &'static str,
    pub help_language: &'static str,
    pub help_confirm: &'static str,
}

static EN: Translations = Translations {
    title: "Pros & Cons List",
    list_title: "List Title",
    add_new_item: "Add New Item",
    select_type: "Select Type",
    pro: "Pro",
    con: "Con",
    reset_list: "Reset List",
    export: "Export",
    print_save: "Print / Save as Text",
    pros: "Pros",
    cons: "Cons",
    no_items_yet: "No items added yet",
    summary: "Summary",
    positive: "Positive",
    recommended: "Recommended",
    not_recommended: "Not Recommended",
    created_on: "Created on",
    light_mode: "Light mode",
    dark_mode: "Dark mode",
    language: "Language",
    confirm_reset: "Clear the title and every item?",
    exported_to: "Exported to",
    export_failed: "Export failed",
    item_added: "Item added",
    item_deleted: "Item deleted",
    help_normal: "[t] title  [a] add  [h/l] column  [j/k] select  [d] delete  [r] reset  [e] export  [g] language  [m] theme  [q] quit",
    help_title: "Type the title  [Enter/Esc] done",
    help_adding: "[Enter] add  [Tab] pro/con  [Esc] close",
    help_language: "[j/k] choose  [Enter] apply  [Esc] cancel",
    help_confirm: "[y] confirm  [n] cancel",
};

static PT: Translations = Translations {
    title: "Lista de Prós e Contras",
    list_title: "Título da Lista",
    add_new_item: "Adicionar Novo Item",
    select_type: "Selecionar Tipo",
    pro: "Pró",
    con: "Contra",
    reset_list: "Reiniciar Lista",
    export: "Exportar",
    print_save: "Imprimir / Salvar como Texto",
    pros: "Prós",
    cons: "Contras",
    no_items_yet: "Nenhum item adicionado ainda",
    summary: "Resumo",
    positive: "Positivo",
    recommended: "Recomendado",
    not_recommended: "Não Recomendado",
    created_on: "Criado em",
    light_mode: "Modo claro",
    dark_mode: "Modo escuro",
    language: "Idioma",
    confirm_reset: "Limpar o título e todos os itens?",
    exported_to: "Exportado para",
    export_failed: "Falha ao exportar",
    item_added: "Item adicionado",
    item_deleted: "Item removido",
    help_normal: "[t] título  [a] adicionar  [h/l] coluna  [j/k] selecionar  [d] remover  [r] reiniciar  [e] exportar  [g] idioma  [m] tema  [q] sair",
    help_title: "Digite o título  [Enter/Esc] concluir",
    help_adding: "[Enter] adicionar  [Tab] pró/contra  [Esc] fechar",
    help_language: "[j/k] escolher  [Enter] aplicar  [Esc] cancelar",
    help_confirm: "[y] confirmar  [n] cancelar",
};

static ES: Translations = Translations {
    title: "Lista de Pros y Contras",
    list_title: "Título de la Lista",
    add_new_item: "Añadir Nuevo Elemento",
    select_type: "Seleccionar Tipo",
    pro: "Pro",
    con: "Contra",
    reset_list: "Reiniciar Lista",
    export: "Exportar",
    print_save: "Imprimir / Guardar como Texto",
    pros: "Pros",
    cons: "Contras",
    no_items_yet: "Aún no se han añadido elementos",
    summary: "Resumen",
    positive: "Positivo",
    recommended: "Recomendado",
    not_recommended: "No Recomendado",
    created_on: "Creado el",
    light_mode: "Modo claro",
    dark_mode: "Modo oscuro",
    language: "Idioma",
    confirm_reset: "¿Borrar el título y todos los elementos?",
    exported_to: "Exportado a",
    export_failed: "Error al exportar",
    item_added: "Elemento añadido",
    item_deleted: "Elemento eliminado",
    help_normal: "[t] título  [a] añadir  [h/l] columna  [j/k] seleccionar  [d] eliminar  [r] reiniciar  [e] exportar  [g] idioma  [m] tema  [q] salir",
    help_title: "Escriba el título  [Enter/Esc] listo",
    help_adding: "[Enter] añadir  [Tab] pro/contra  [Esc] cerrar",
    help_language: "[j/k] elegir  [Enter] aplicar  [Esc] cancelar",
    help_confirm: "[y] confirmar  [n] cancelar",
};

pub fn translations(language: Language) -> &'static Translations {
    match language {
        Language::En => &EN,
        Language::Pt => &PT,
        Language::Es => &ES,
    }
}
