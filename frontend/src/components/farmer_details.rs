use shared::config::SEASONS;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FarmerDetailsProps {
    pub disabled: bool,
}

#[derive(Properties, PartialEq)]
struct TextFieldProps {
    id: AttrValue,
    label: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    input_type: AttrValue,
    #[prop_or_default]
    placeholder: AttrValue,
    disabled: bool,
}

#[function_component(TextField)]
fn text_field(props: &TextFieldProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{props.label.clone()}</label>
            <input
                type={props.input_type.clone()}
                id={props.id.clone()}
                name={props.id.clone()}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
            />
        </div>
    }
}

/// Farmer, crop and location inputs
#[function_component(FarmerDetailsSection)]
pub fn farmer_details_section(props: &FarmerDetailsProps) -> Html {
    let disabled = props.disabled;

    html! {
        <section class="farmer-details-section">
            <h2>{"🌾 Farmer & Crop Details"}</h2>

            <div class="form-grid">
                <TextField id="farmerName" label="Farmer Name" placeholder="Ramesh Patil" {disabled} />
                <TextField id="cropName" label="Crop Name" placeholder="Soybean" {disabled} />

                <div class="form-group">
                    <label for="season">{"Season"}</label>
                    <select id="season" name="season" {disabled}>
                        {for SEASONS.iter().map(|season| html! {
                            <option value={*season}>{*season}</option>
                        })}
                    </select>
                </div>

                <div class="form-group">
                    <label for="totalAcres">{"Total Acres"}</label>
                    <input
                        type="number"
                        id="totalAcres"
                        name="totalAcres"
                        placeholder="2.5"
                        step="0.01"
                        min="0"
                        {disabled}
                    />
                </div>

                <TextField id="sowingDate" label="Sowing Date" input_type="date" {disabled} />
                <TextField id="harvestDate" label="Harvest Date" input_type="date" {disabled} />
            </div>

            <h3>{"📍 Location"}</h3>
            <div class="form-grid">
                <TextField id="village" label="Village" {disabled} />
                <TextField id="taluka" label="Taluka" {disabled} />
                <TextField id="district" label="District" {disabled} />
                <TextField id="state" label="State" {disabled} />
            </div>
        </section>
    }
}
