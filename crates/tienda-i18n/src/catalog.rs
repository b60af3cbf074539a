//! Static string tables. Key order mirrors the dashboard surface: navbar,
//! KPIs, load states, charts, tables, survey info tabs, variable
//! descriptions, analysis methods.

/// Every catalog key, used to check table coverage in tests.
pub(crate) const ALL_KEYS: &[&str] = &[
    "nav_title",
    "nav_subtitle",
    "kpi_total_customers",
    "kpi_avg_income",
    "kpi_avg_frequency",
    "kpi_avg_spending",
    "loading_dashboard",
    "error_loading_data",
    "error_rerun_hint",
    "chart_income_distribution",
    "chart_income_vs_spending",
    "chart_pca",
    "chart_spending_by_cluster",
    "label_income",
    "label_frequency",
    "label_spending",
    "label_pc1",
    "label_pc2",
    "label_variance",
    "label_customers",
    "label_male",
    "label_female",
    "label_cluster",
    "table_regression_title",
    "table_anova_title",
    "regression_model",
    "regression_r_squared",
    "regression_adj_r_squared",
    "regression_f_statistic",
    "header_variable",
    "header_coefficient",
    "header_std_error",
    "header_t_value",
    "header_p_value",
    "header_source",
    "header_sum_squares",
    "header_df",
    "header_f_value",
    "anova_model",
    "anova_model_formula",
    "tab_overview",
    "tab_participants",
    "tab_areas",
    "tab_variables",
    "tab_details",
    "survey_total_respondents",
    "survey_gender_distribution",
    "survey_customer_groups",
    "survey_data_status",
    "survey_complete",
    "survey_participants_list",
    "survey_showing_first",
    "survey_of",
    "survey_customer",
    "survey_viewing_subset",
    "survey_total_participants",
    "survey_geographic_distribution",
    "survey_people",
    "survey_collection_period",
    "survey_methodology",
    "survey_random_sampling",
    "survey_data_type",
    "survey_quantitative",
    "survey_variables",
    "survey_income_range",
    "survey_analysis_types",
    "survey_multivariate",
    "zone_economic",
    "zone_moderate",
    "zone_premium",
    "var_variable",
    "var_description",
    "var_id",
    "var_id_desc",
    "var_age",
    "var_age_desc",
    "var_gender",
    "var_gender_desc",
    "var_monthly_income",
    "var_monthly_income_desc",
    "var_purchase_frequency",
    "var_purchase_frequency_desc",
    "var_avg_spending",
    "var_avg_spending_desc",
    "var_satisfaction",
    "var_satisfaction_desc",
    "var_preferred_category",
    "var_preferred_category_desc",
    "analysis_methods_title",
    "analysis_regression",
    "analysis_regression_desc",
    "analysis_anova",
    "analysis_anova_desc",
    "analysis_pca",
    "analysis_pca_desc",
    "analysis_cluster",
    "analysis_cluster_desc",
];

pub(crate) fn english(key: &str) -> Option<&'static str> {
    let text = match key {
        "nav_title" => "Shopping Analytics Dashboard",
        "nav_subtitle" => "Multivariate Analysis Visualization",
        "kpi_total_customers" => "Total Customers",
        "kpi_avg_income" => "Avg Monthly Income",
        "kpi_avg_frequency" => "Avg Purchase Frequency",
        "kpi_avg_spending" => "Avg Spending",
        "loading_dashboard" => "Loading dashboard data...",
        "error_loading_data" => "Error loading data",
        "error_rerun_hint" => "Please run the analysis script first:",
        "chart_income_distribution" => "Distribution of Monthly Income",
        "chart_income_vs_spending" => "Income vs Spending by Gender",
        "chart_pca" => "PCA: Principal Components Analysis",
        "chart_spending_by_cluster" => "Average Spending by Cluster",
        "label_income" => "Monthly Income (MXN)",
        "label_frequency" => "Frequency",
        "label_spending" => "Average Spending (MXN)",
        "label_pc1" => "PC1",
        "label_pc2" => "PC2",
        "label_variance" => "variance",
        "label_customers" => "Customers",
        "label_male" => "Male",
        "label_female" => "Female",
        "label_cluster" => "Cluster",
        "table_regression_title" => "Regression Results",
        "table_anova_title" => "ANOVA Results",
        "regression_model" => "Model:",
        "regression_r_squared" => "R²:",
        "regression_adj_r_squared" => "Adj. R²:",
        "regression_f_statistic" => "F-statistic:",
        "header_variable" => "Variable",
        "header_coefficient" => "Coefficient",
        "header_std_error" => "Std Error",
        "header_t_value" => "t-value",
        "header_p_value" => "p-value",
        "header_source" => "Source",
        "header_sum_squares" => "Sum of Squares",
        "header_df" => "df",
        "header_f_value" => "F-value",
        "anova_model" => "Model:",
        "anova_model_formula" => "AverageSpending ~ Gender",
        "tab_overview" => "Overview",
        "tab_participants" => "Participants",
        "tab_areas" => "Areas",
        "tab_variables" => "Variables",
        "tab_details" => "Details",
        "survey_total_respondents" => "Total Respondents",
        "survey_gender_distribution" => "Gender Distribution",
        "survey_customer_groups" => "Customer Groups",
        "survey_data_status" => "Data Status",
        "survey_complete" => "Complete",
        "survey_participants_list" => "Participants List",
        "survey_showing_first" => "Showing first",
        "survey_of" => "of",
        "survey_customer" => "Customer",
        "survey_viewing_subset" => "Viewing",
        "survey_total_participants" => "total participants",
        "survey_geographic_distribution" => "Geographic Distribution",
        "survey_people" => "people",
        "survey_collection_period" => "Collection Period",
        "survey_methodology" => "Methodology",
        "survey_random_sampling" => "Random Sampling",
        "survey_data_type" => "Data Type",
        "survey_quantitative" => "Quantitative",
        "survey_variables" => "Variables",
        "survey_income_range" => "Income Range",
        "survey_analysis_types" => "Analysis Types",
        "survey_multivariate" => "Regression, ANOVA, PCA, Clustering",
        "zone_economic" => "Economic Zone",
        "zone_moderate" => "Moderate Zone",
        "zone_premium" => "Premium Zone",
        "var_variable" => "Variable",
        "var_description" => "Description",
        "var_id" => "ID",
        "var_id_desc" => "Respondent identification",
        "var_age" => "Age",
        "var_age_desc" => "Age of the respondent (in years)",
        "var_gender" => "Gender",
        "var_gender_desc" => "Gender of the respondent (Male/Female)",
        "var_monthly_income" => "Monthly Income",
        "var_monthly_income_desc" => "Monthly income of the respondent (in pesos)",
        "var_purchase_frequency" => "Purchase Frequency",
        "var_purchase_frequency_desc" => "Number of online purchases made in the last month",
        "var_avg_spending" => "Average Spending",
        "var_avg_spending_desc" => "Average spending per online purchase (in pesos)",
        "var_satisfaction" => "Satisfaction",
        "var_satisfaction_desc" => "Satisfaction level with online purchases (scale 1-5)",
        "var_preferred_category" => "Preferred Category",
        "var_preferred_category_desc" => {
            "Preferred product category (Electronics, Clothing, Food, etc.)"
        }
        "analysis_methods_title" => "Statistical Analysis Methods",
        "analysis_regression" => "Multiple Regression",
        "analysis_regression_desc" => {
            "Evaluate how monthly income, age, and gender affect the frequency of online purchases."
        }
        "analysis_anova" => "Analysis of Variance (ANOVA)",
        "analysis_anova_desc" => {
            "Compare satisfaction levels across different product categories."
        }
        "analysis_pca" => "Principal Component Analysis (PCA)",
        "analysis_pca_desc" => "Reduce data dimensionality and explore underlying structure.",
        "analysis_cluster" => "Cluster Analysis",
        "analysis_cluster_desc" => {
            "Group respondents according to their shopping habits and average spending."
        }
        _ => return None,
    };
    Some(text)
}

pub(crate) fn spanish(key: &str) -> Option<&'static str> {
    let text = match key {
        "nav_title" => "Panel de Análisis de Compras",
        "nav_subtitle" => "Visualización de Análisis Multivariable",
        "kpi_total_customers" => "Total de Clientes",
        "kpi_avg_income" => "Ingreso Mensual Promedio",
        "kpi_avg_frequency" => "Frecuencia de Compra Promedio",
        "kpi_avg_spending" => "Gasto Promedio",
        "loading_dashboard" => "Cargando datos del panel...",
        "error_loading_data" => "Error al cargar datos",
        "error_rerun_hint" => "Por favor ejecute el script de análisis primero:",
        "chart_income_distribution" => "Distribución de Ingreso Mensual",
        "chart_income_vs_spending" => "Ingreso vs Gasto por Género",
        "chart_pca" => "ACP: Análisis de Componentes Principales",
        "chart_spending_by_cluster" => "Gasto Promedio por Grupo",
        "label_income" => "Ingreso Mensual (MXN)",
        "label_frequency" => "Frecuencia",
        "label_spending" => "Gasto Promedio (MXN)",
        "label_pc1" => "CP1",
        "label_pc2" => "CP2",
        "label_variance" => "varianza",
        "label_customers" => "Clientes",
        "label_male" => "Masculino",
        "label_female" => "Femenino",
        "label_cluster" => "Grupo",
        "table_regression_title" => "Resultados de Regresión",
        "table_anova_title" => "Resultados de ANOVA",
        "regression_model" => "Modelo:",
        "regression_r_squared" => "R²:",
        "regression_adj_r_squared" => "R² Ajustado:",
        "regression_f_statistic" => "Estadístico F:",
        "header_variable" => "Variable",
        "header_coefficient" => "Coeficiente",
        "header_std_error" => "Error Estándar",
        "header_t_value" => "Valor t",
        "header_p_value" => "Valor p",
        "header_source" => "Fuente",
        "header_sum_squares" => "Suma de Cuadrados",
        "header_df" => "gl",
        "header_f_value" => "Valor F",
        "anova_model" => "Modelo:",
        "anova_model_formula" => "GastoPromedio ~ Género",
        "tab_overview" => "Resumen",
        "tab_participants" => "Participantes",
        "tab_areas" => "Áreas",
        "tab_variables" => "Variables",
        "tab_details" => "Detalles",
        "survey_total_respondents" => "Total de Encuestados",
        "survey_gender_distribution" => "Distribución por Género",
        "survey_customer_groups" => "Grupos de Clientes",
        "survey_data_status" => "Estado de Datos",
        "survey_complete" => "Completo",
        "survey_participants_list" => "Lista de Participantes",
        "survey_showing_first" => "Mostrando primeros",
        "survey_of" => "de",
        "survey_customer" => "Cliente",
        "survey_viewing_subset" => "Visualizando",
        "survey_total_participants" => "participantes totales",
        "survey_geographic_distribution" => "Distribución Geográfica",
        "survey_people" => "personas",
        "survey_collection_period" => "Período de Recolección",
        "survey_methodology" => "Metodología",
        "survey_random_sampling" => "Muestreo Aleatorio",
        "survey_data_type" => "Tipo de Datos",
        "survey_quantitative" => "Cuantitativo",
        "survey_variables" => "Variables",
        "survey_income_range" => "Rango de Ingresos",
        "survey_analysis_types" => "Tipos de Análisis",
        "survey_multivariate" => "Regresión, ANOVA, ACP, Agrupamiento",
        "zone_economic" => "Zona Económica",
        "zone_moderate" => "Zona Moderada",
        "zone_premium" => "Zona Premium",
        "var_variable" => "Variable",
        "var_description" => "Descripción",
        "var_id" => "ID",
        "var_id_desc" => "Identificación del encuestado",
        "var_age" => "Edad",
        "var_age_desc" => "Edad del encuestado (en años)",
        "var_gender" => "Género",
        "var_gender_desc" => "Género del encuestado (Masculino/Femenino)",
        "var_monthly_income" => "Ingreso Mensual",
        "var_monthly_income_desc" => "Ingreso mensual del encuestado (en pesos)",
        "var_purchase_frequency" => "Frecuencia de Compras",
        "var_purchase_frequency_desc" => {
            "Número de compras en línea realizadas en el último mes"
        }
        "var_avg_spending" => "Gastos Promedio",
        "var_avg_spending_desc" => "Gastos promedio por compra en línea (en pesos)",
        "var_satisfaction" => "Satisfacción",
        "var_satisfaction_desc" => {
            "Nivel de satisfacción con las compras en línea (escala 1-5)"
        }
        "var_preferred_category" => "Categoría Preferida",
        "var_preferred_category_desc" => {
            "Categoría de productos preferida (Electrónica, Ropa, Alimentos, etc.)"
        }
        "analysis_methods_title" => "Métodos de Análisis Estadístico",
        "analysis_regression" => "Regresión Múltiple",
        "analysis_regression_desc" => {
            "Evaluar cómo el ingreso mensual, la edad y el género afectan la frecuencia de compras en línea."
        }
        "analysis_anova" => "Análisis de Varianza (ANOVA)",
        "analysis_anova_desc" => {
            "Comparar el nivel de satisfacción entre diferentes categorías de productos."
        }
        "analysis_pca" => "Análisis de Componentes Principales (PCA)",
        "analysis_pca_desc" => {
            "Reducir la dimensionalidad de los datos y explorar la estructura subyacente."
        }
        "analysis_cluster" => "Análisis de Clúster",
        "analysis_cluster_desc" => {
            "Agrupar encuestados según sus hábitos de compra y gastos promedio."
        }
        _ => return None,
    };
    Some(text)
}
