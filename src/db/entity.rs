//! Descriptors for the catalog resources.
//!
//! Every resource is the same `(id, name)` table; a descriptor supplies the
//! table name, the route segment and the user-facing messages so that a single
//! generic repository and a single set of handlers serve all of them.

/// Static description of one catalog resource.
pub trait CatalogEntity: Send + Sync + 'static {
    /// SQL table name.
    const TABLE: &'static str;
    /// Kebab-case route segment, e.g. `food-group`.
    const ROUTE: &'static str;
    /// Alternative query key for the id, e.g. `food_group_id`.
    const ID_PARAM: &'static str;
    /// Human label used in logs.
    const LABEL: &'static str;

    const NOT_FOUND: &'static str;
    const DUPLICATE_NAME: &'static str;
    const IN_USE: &'static str;
}

#[derive(Debug, Clone, Copy)]
pub struct FoodGroup;

impl CatalogEntity for FoodGroup {
    const TABLE: &'static str = "food_group";
    const ROUTE: &'static str = "food-group";
    const ID_PARAM: &'static str = "food_group_id";
    const LABEL: &'static str = "food group";

    const NOT_FOUND: &'static str = "Grupo alimenticio no encontrado";
    const DUPLICATE_NAME: &'static str = "Nombre de grupo alimenticio ya está en uso";
    const IN_USE: &'static str = "El grupo alimenticio está en uso y no puede eliminarse";
}

#[derive(Debug, Clone, Copy)]
pub struct FoodMoment;

impl CatalogEntity for FoodMoment {
    const TABLE: &'static str = "food_moment";
    const ROUTE: &'static str = "food-moment";
    const ID_PARAM: &'static str = "food_moment_id";
    const LABEL: &'static str = "food moment";

    const NOT_FOUND: &'static str = "Momento alimenticio no encontrado";
    const DUPLICATE_NAME: &'static str = "Nombre de momento alimenticio ya está en uso";
    const IN_USE: &'static str = "El momento alimenticio está en uso y no puede eliminarse";
}

#[derive(Debug, Clone, Copy)]
pub struct MacronutrientGroup;

impl CatalogEntity for MacronutrientGroup {
    const TABLE: &'static str = "macronutrient_group";
    const ROUTE: &'static str = "macronutrient-group";
    const ID_PARAM: &'static str = "macronutrient_group_id";
    const LABEL: &'static str = "macronutrient group";

    const NOT_FOUND: &'static str = "Grupo de macronutrientes no encontrado";
    const DUPLICATE_NAME: &'static str = "Nombre de grupo de macronutrientes ya está en uso";
    const IN_USE: &'static str = "El grupo de macronutrientes está en uso y no puede eliminarse";
}

#[derive(Debug, Clone, Copy)]
pub struct MicronutrientGroup;

impl CatalogEntity for MicronutrientGroup {
    const TABLE: &'static str = "micronutrient_group";
    const ROUTE: &'static str = "micronutrient-group";
    const ID_PARAM: &'static str = "micronutrient_group_id";
    const LABEL: &'static str = "micronutrient group";

    const NOT_FOUND: &'static str = "Grupo de micronutrientes no encontrado";
    const DUPLICATE_NAME: &'static str = "Nombre de grupo de micronutrientes ya está en uso";
    const IN_USE: &'static str = "El grupo de micronutrientes está en uso y no puede eliminarse";
}

#[derive(Debug, Clone, Copy)]
pub struct SpecialCondition;

impl CatalogEntity for SpecialCondition {
    const TABLE: &'static str = "special_condition";
    const ROUTE: &'static str = "special-condition";
    const ID_PARAM: &'static str = "special_condition_id";
    const LABEL: &'static str = "special condition";

    const NOT_FOUND: &'static str = "Condición especial no encontrada";
    const DUPLICATE_NAME: &'static str = "Nombre de condición especial ya está en uso";
    const IN_USE: &'static str = "La condición especial está en uso y no puede eliminarse";
}
