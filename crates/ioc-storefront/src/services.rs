//! Storefront Service Contracts
//!
//! One contract per storefront service, all bound in `RootContext` with the
//! per-execution-context lifetime so every request gets its own instance
//! while sharing it between the components that serve that request.
//!
//! The registry never looks inside these services; the default
//! implementations only identify themselves.

use std::sync::Arc;

use ioc_domain::{Contract, ContractId};
use ioc_infrastructure::di::{Binding, BindingTable};

/// Capabilities every storefront service shares
pub trait StorefrontService: Send + Sync {
    /// Name of the concrete implementation
    fn service_name(&self) -> &'static str;
}

/// Declares service contracts, default implementations and their bindings
///
/// For every entry the macro generates:
/// - the contract trait (a [`StorefrontService`] subtrait)
/// - a unit struct implementing it
/// - a typed `Contract` constant registered under the given name
///
/// plus [`SERVICE_CONTRACTS`] and `register_services` covering all entries.
macro_rules! storefront_services {
    (
        $(
            $(#[$meta:meta])*
            $contract:ident: $trait_name:ident => $impl_name:ident = $registration:literal
        ),* $(,)?
    ) => {
        $(
            $(#[$meta])*
            pub trait $trait_name: StorefrontService {}

            #[doc = concat!("Default `", $registration, "` implementation")]
            #[derive(Debug, Default, Clone, Copy)]
            pub struct $impl_name;

            impl StorefrontService for $impl_name {
                fn service_name(&self) -> &'static str {
                    stringify!($impl_name)
                }
            }

            impl $trait_name for $impl_name {}

            #[doc = concat!("Contract token for `", $registration, "`")]
            pub const $contract: Contract<dyn $trait_name> = Contract::new($registration);
        )*

        /// Every service contract bound in the root scope, in registration order
        pub const SERVICE_CONTRACTS: &[ContractId] = &[$($contract.id()),*];

        /// Bind every service with its default implementation
        pub fn register_services(bindings: &mut BindingTable) {
            $(
                bindings.register(Binding::new($contract, stringify!($impl_name), |_| {
                    Ok(Arc::new($impl_name) as Arc<dyn $trait_name>)
                }));
            )*
        }
    };
}

storefront_services! {
    /// Tracks anonymous and registered visitors currently online
    ONLINE_USER_SERVICE: OnlineUserService => DefaultOnlineUserService = "IOnlineUserService",
    /// Records catalogue search terms
    SEARCH_LOG_SERVICE: SearchLogService => DefaultSearchLogService = "ISearchLogService",
    /// Customer activity log
    CUSTOMER_ACTIVITY_SERVICE: CustomerActivityService => DefaultCustomerActivityService = "ICustomerActivityService",
    /// System log
    LOG_SERVICE: LogService => DefaultLogService = "ILogService",
    CATEGORY_SERVICE: CategoryService => DefaultCategoryService = "ICategoryService",
    /// Persistent key/value settings
    SETTING_MANAGER: SettingManager => DefaultSettingManager = "ISettingManager",
    BLOG_SERVICE: BlogService => DefaultBlogService = "IBlogService",
    FORUM_SERVICE: ForumService => DefaultForumService = "IForumService",
    NEWS_SERVICE: NewsService => DefaultNewsService = "INewsService",
    POLL_SERVICE: PollService => DefaultPollService = "IPollService",
    TOPIC_SERVICE: TopicService => DefaultTopicService = "ITopicService",
    CUSTOMER_SERVICE: CustomerService => DefaultCustomerService = "ICustomerService",
    COUNTRY_SERVICE: CountryService => DefaultCountryService = "ICountryService",
    CURRENCY_SERVICE: CurrencyService => DefaultCurrencyService = "ICurrencyService",
    LANGUAGE_SERVICE: LanguageService => DefaultLanguageService = "ILanguageService",
    STATE_PROVINCE_SERVICE: StateProvinceService => DefaultStateProvinceService = "IStateProvinceService",
    /// Localized string resources
    LOCALE_STRING_RESOURCE_MANAGER: LocaleStringResourceManager => DefaultLocaleStringResourceManager = "ILocaleStringResourceManager",
    MAINTENANCE_SERVICE: MaintenanceService => DefaultMaintenanceService = "IMaintenanceService",
    MANUFACTURER_SERVICE: ManufacturerService => DefaultManufacturerService = "IManufacturerService",
    /// Weights and dimensions
    MEASURE_SERVICE: MeasureService => DefaultMeasureService = "IMeasureService",
    DOWNLOAD_SERVICE: DownloadService => DefaultDownloadService = "IDownloadService",
    PICTURE_SERVICE: PictureService => DefaultPictureService = "IPictureService",
    SMS_SERVICE: SmsService => DefaultSmsService = "ISMSService",
    /// Outgoing email and message templates
    MESSAGE_SERVICE: MessageService => DefaultMessageService = "IMessageService",
    ORDER_SERVICE: OrderService => DefaultOrderService = "IOrderService",
    SHOPPING_CART_SERVICE: ShoppingCartService => DefaultShoppingCartService = "IShoppingCartService",
    PAYMENT_SERVICE: PaymentService => DefaultPaymentService = "IPaymentService",
    CHECKOUT_ATTRIBUTE_SERVICE: CheckoutAttributeService => DefaultCheckoutAttributeService = "ICheckoutAttributeService",
    PRODUCT_ATTRIBUTE_SERVICE: ProductAttributeService => DefaultProductAttributeService = "IProductAttributeService",
    SPECIFICATION_ATTRIBUTE_SERVICE: SpecificationAttributeService => DefaultSpecificationAttributeService = "ISpecificationAttributeService",
    PRODUCT_SERVICE: ProductService => DefaultProductService = "IProductService",
    AFFILIATE_SERVICE: AffiliateService => DefaultAffiliateService = "IAffiliateService",
    CAMPAIGN_SERVICE: CampaignService => DefaultCampaignService = "ICampaignService",
    DISCOUNT_SERVICE: DiscountService => DefaultDiscountService = "IDiscountService",
    /// QuickBooks synchronization
    QB_SERVICE: QbService => DefaultQbService = "IQBService",
    /// Access control lists
    ACL_SERVICE: AclService => DefaultAclService = "IACLService",
    /// IP and network blacklist
    BLACKLIST_SERVICE: BlacklistService => DefaultBlacklistService = "IBlacklistService",
    SHIPPING_BY_TOTAL_SERVICE: ShippingByTotalService => DefaultShippingByTotalService = "IShippingByTotalService",
    SHIPPING_BY_WEIGHT_AND_COUNTRY_SERVICE: ShippingByWeightAndCountryService => DefaultShippingByWeightAndCountryService = "IShippingByWeightAndCountryService",
    SHIPPING_BY_WEIGHT_SERVICE: ShippingByWeightService => DefaultShippingByWeightService = "IShippingByWeightService",
    SHIPPING_SERVICE: ShippingService => DefaultShippingService = "IShippingService",
    TAX_CATEGORY_SERVICE: TaxCategoryService => DefaultTaxCategoryService = "ITaxCategoryService",
    TAX_SERVICE: TaxService => DefaultTaxService = "ITaxService",
    TAX_PROVIDER_SERVICE: TaxProviderService => DefaultTaxProviderService = "ITaxProviderService",
    TAX_RATE_SERVICE: TaxRateService => DefaultTaxRateService = "ITaxRateService",
    TEMPLATE_SERVICE: TemplateService => DefaultTemplateService = "ITemplateService",
    WAREHOUSE_SERVICE: WarehouseService => DefaultWarehouseService = "IWarehouseService",
}
